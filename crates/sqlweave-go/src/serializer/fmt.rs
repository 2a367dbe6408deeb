use super::Formatter;

use sqlweave_core::schema::Type;

macro_rules! fmt {
    ($f:expr, $( $fragments:expr )*) => {{
        $(
            $fragments.to_go($f);
        )*
    }};
}

pub(crate) trait ToGo {
    fn to_go(self, f: &mut Formatter<'_>);
}

impl ToGo for &str {
    fn to_go(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToGo for &String {
    fn to_go(self, f: &mut Formatter<'_>) {
        f.dst.push_str(self);
    }
}

impl ToGo for &Type {
    fn to_go(self, f: &mut Formatter<'_>) {
        use std::fmt::Write;

        // Writing into a String cannot fail
        let _ = write!(f.dst, "{self}");
    }
}
