use super::{Formatter, ToGo};

use sqlweave_core::schema::Type;

/// A value handed to the driver, wrapped in the array adapter when the
/// driver cannot encode the value's list type itself.
pub(crate) struct Bind<'a, E> {
    pub(crate) ty: &'a Type,

    /// Spread parameters are expanded by the caller and never wrapped
    pub(crate) spread: bool,

    pub(crate) expr: E,
}

/// The address of a scan destination: `&expr`.
pub(crate) struct Addr<E>(pub(crate) E);

impl<E: ToGo> ToGo for Bind<'_, E> {
    fn to_go(self, f: &mut Formatter<'_>) {
        let wrap = match self.ty {
            Type::List(_) => !self.spread && f.capability.needs_array_adapter(),
            Type::Scalar(_)
            | Type::Bytes
            | Type::Nullable(_)
            | Type::Record(_)
            | Type::Named(_) => false,
        };

        if wrap {
            let adapter = f.capability.array_adapter;
            fmt!(f, adapter "(" self.expr ")");
        } else {
            fmt!(f, self.expr);
        }
    }
}

impl<E: ToGo> ToGo for Addr<E> {
    fn to_go(self, f: &mut Formatter<'_>) {
        fmt!(f, "&" self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use sqlweave_core::Capability;

    fn bind(capability: Capability, ty: &str, spread: bool) -> String {
        let ty = Type::parse(ty);
        Formatter::render_for(
            capability,
            Bind {
                ty: &ty,
                spread,
                expr: "tags",
            },
        )
    }

    #[test]
    fn lists_wrapped_without_native_arrays() {
        assert_eq!(bind(Capability::LIB_PQ, "[]string", false), "pq.Array(tags)");
        assert_eq!(bind(Capability::PGX, "[]string", false), "tags");
    }

    #[test]
    fn bytes_never_wrapped() {
        assert_eq!(bind(Capability::LIB_PQ, "[]byte", false), "tags");
        assert_eq!(bind(Capability::PGX, "[]byte", false), "tags");
    }

    #[test]
    fn spread_never_wrapped() {
        assert_eq!(bind(Capability::LIB_PQ, "[]int64", true), "tags");
    }

    #[test]
    fn address_inside_adapter() {
        let ty = Type::parse("[]int32");
        let rendered = Formatter::render_for(
            Capability::LIB_PQ,
            Bind {
                ty: &ty,
                spread: false,
                expr: Addr("i.Ids"),
            },
        );
        assert_eq!(rendered, "pq.Array(&i.Ids)");
    }
}
