//! Show session progress

use dockscan::core::services::normalize;
use dockscan::output::StatusResult;

use super::Context;

/// Print per-item progress and the global counter
///
/// `focus` may be any valid code of an item, with or without suffix; the
/// matching item is listed first.
pub fn status(focus: Option<&str>, ctx: &Context) -> anyhow::Result<()> {
    let session = ctx.open_session();
    let state = session.state();
    let primary = focus
        .and_then(|code| state.find_item(&normalize(code).main))
        .map(|index| state.manifest[index].primary_code.as_str());

    StatusResult::new(state, primary).render(ctx.mode);
    Ok(())
}
