use super::{Formatter, ToGo};

/// Comma delimited
pub(crate) struct Comma<L>(pub(crate) L);

/// Period delimited
pub(crate) struct Period<L>(pub(crate) L);

/// An argument list as it appears inside a call: up to three entries inline,
/// otherwise one entry per line with a trailing comma.
pub(crate) struct ArgList<'a>(pub(crate) &'a [String]);

/// A tuple of fragments written back to back.
pub(crate) struct Concat<T>(pub(crate) T);

/// Entries at or below this count are joined on one line.
pub(crate) const INLINE_MAX: usize = 3;

impl<L> ToGo for Comma<L>
where
    L: IntoIterator,
    L::Item: ToGo,
{
    fn to_go(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = ", ";
        }
    }
}

impl<L, I> ToGo for Period<L>
where
    L: IntoIterator<Item = I>,
    I: ToGo,
{
    fn to_go(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0.into_iter() {
            fmt!(f, s i);
            s = ".";
        }
    }
}

impl ToGo for ArgList<'_> {
    fn to_go(self, f: &mut Formatter<'_>) {
        if self.0.len() <= INLINE_MAX {
            let mut s = "";
            for entry in self.0 {
                fmt!(f, s entry);
                s = ",";
            }
        } else {
            fmt!(f, "\n");
            for entry in self.0 {
                fmt!(f, entry ",\n");
            }
        }
    }
}

macro_rules! impl_concat {
    ( $( $v:ident : $t:ident ),+ ) => {
        impl<$( $t: ToGo ),+> ToGo for Concat<($( $t, )+)> {
            fn to_go(self, f: &mut Formatter<'_>) {
                let ($( $v, )+) = self.0;
                fmt!(f, $( $v )+);
            }
        }
    };
}

impl_concat!(a: A, b: B, c: C);
impl_concat!(a: A, b: B, c: C, d: D);
impl_concat!(a: A, b: B, c: C, d: D, e: E);
