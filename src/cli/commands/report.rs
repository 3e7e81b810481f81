//! Build and send the session report

use chrono::{Local, Utc};
use dockscan::adapters::http::HttpReportSink;
use dockscan::core::services::ReportMeta;
use dockscan::error::SubmitError;
use dockscan::output::ReportResult;

use super::{Context, runtime};
use crate::cli::app::ReportArgs;

/// Date format used when no date is given (day/month/year)
const DATE_FORMAT: &str = "%-d/%-m/%Y";

/// Validate the header, then print or send the report
///
/// The session is left untouched whether the send succeeds or not.
pub fn report(args: ReportArgs, ctx: &Context) -> anyhow::Result<()> {
    let session = ctx.open_session();
    let meta = ReportMeta {
        plate: args.placa.unwrap_or_default(),
        sender: args.remitente.unwrap_or_default(),
        date: args.fecha.unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string()),
        site: args.sede,
    };
    let payload = session.report(
        &meta,
        &ctx.config.report.site_policy(),
        &ctx.config.report.tipo,
        Utc::now(),
    )?;

    if args.dry_run {
        ReportResult {
            submitted: false,
            receipt: None,
            payload: Some(payload),
        }
        .render(ctx.mode);
        return Ok(());
    }

    let endpoint = args
        .endpoint
        .as_deref()
        .or(ctx.config.report.endpoint.as_deref())
        .ok_or(SubmitError::NoEndpoint)?;
    let sink = HttpReportSink::new(ctx.http_client().map_err(SubmitError::from)?, endpoint)?;
    let receipt = runtime()?.block_on(session.submit_report(&sink, &payload))?;

    ReportResult {
        submitted: true,
        receipt: Some(receipt),
        payload: None,
    }
    .render(ctx.mode);
    Ok(())
}
