//! Submit scanned codes given on the command line

use dockscan::output::ScanResult;

use super::Context;

/// Submit each code in order against the current session
pub fn scan(codes: &[String], ctx: &Context) -> anyhow::Result<()> {
    let mut session = ctx.open_session();
    if session.state().is_empty() {
        log::warn!("no manifest loaded; every scan will be logged as unmatched");
    }

    let mut receipts = Vec::with_capacity(codes.len());
    for code in codes.iter().map(|c| c.trim()).filter(|c| !c.is_empty()) {
        receipts.push(session.submit_scan(code, chrono::Local::now().time())?);
    }

    ScanResult::new(receipts, session.state()).render(ctx.mode);
    Ok(())
}
