//! Connects a host runtime to the plugin context.

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

use std::rc::Rc;

use super::HostRuntime;
use crate::context::PluginContext;
use crate::net::api::BriefBackend;
use crate::state::form::BriefForm;
use crate::state::store::Store;
use crate::state::ui::PluginUi;

/// Initialize the host and hand its ready handle to `ctx`.
///
/// Nothing happens until the host signals ready; if it never does, the
/// context stays detached and the action buttons stay inert.
pub fn attach<R, B, U, F>(runtime: &R, ctx: &Rc<PluginContext<R::Handle, B, U, F>>, access_token: &str)
where
    R: HostRuntime,
    B: BriefBackend + 'static,
    U: Store<PluginUi> + 'static,
    F: Store<BriefForm> + 'static,
{
    runtime.init(access_token);
    let ctx = Rc::clone(ctx);
    runtime.on_ready(Box::new(move |handle| ctx.on_host_ready(handle)));
}
