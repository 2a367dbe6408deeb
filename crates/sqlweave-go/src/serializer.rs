#[macro_use]
mod fmt;
pub(crate) use fmt::ToGo;

mod bind;
pub(crate) use bind::{Addr, Bind};

mod delim;
pub(crate) use delim::{ArgList, Comma, Concat, Period};

mod flavor;
pub use flavor::Flavor;

mod ident;
pub(crate) use ident::{escape, BackQuoted, Quoted};

mod nullable;
pub use nullable::PresenceRule;
pub(crate) use nullable::{Extract, PresenceGuard, TempVar};

use sqlweave_core::Capability;

/// Writes Go source fragments.
pub(crate) struct Formatter<'a> {
    /// Where to write the fragment
    dst: &'a mut String,

    /// Capability of the driver the fragment is generated for
    capability: Capability,
}

impl<'a> Formatter<'a> {
    pub(crate) fn new(dst: &'a mut String, capability: Capability) -> Formatter<'a> {
        Formatter { dst, capability }
    }

    /// Renders a fragment that does not depend on the driver.
    pub(crate) fn render(fragment: impl ToGo) -> String {
        Formatter::render_for(Capability::default(), fragment)
    }

    pub(crate) fn render_for(capability: Capability, fragment: impl ToGo) -> String {
        let mut ret = String::new();
        fragment.to_go(&mut Formatter::new(&mut ret, capability));
        ret
    }
}

/// Renders each entry on its own, then lays them out as a call argument list.
pub(crate) fn arg_list<I>(capability: Capability, entries: I) -> String
where
    I: IntoIterator,
    I::Item: ToGo,
{
    let entries: Vec<String> = entries
        .into_iter()
        .map(|entry| Formatter::render_for(capability, entry))
        .collect();

    Formatter::render(ArgList(&entries))
}
