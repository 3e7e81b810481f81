//! Load a manifest and start a new session

use dockscan::adapters::delimited::parse_manifest;
use dockscan::adapters::file::FileManifestSource;
use dockscan::adapters::http::{HttpManifestSource, sheet_export_url};
use dockscan::core::ports::ManifestSource;
use dockscan::error::FetchError;
use dockscan::output::LoadResult;

use super::{Context, runtime};
use crate::cli::app::SourceArgs;

/// Fetch, parse and load a manifest, replacing the current session
///
/// A session that already logged scans is only replaced with `force`;
/// the fetch happens before anything is touched, so a failed download
/// leaves the session as it was.
pub fn load(source: &SourceArgs, force: bool, ctx: &Context) -> anyhow::Result<()> {
    let mut session = ctx.open_session();
    let state = session.state();
    if !force && !(state.correct_log.is_empty() && state.incorrect_log.is_empty()) {
        anyhow::bail!(
            "a session with {} of {} units scanned is in progress; run 'dockscan finish' or pass --force",
            state.global_accepted,
            state.total_expected
        );
    }

    let (label, text) = runtime()?.block_on(fetch(source, ctx))?;
    let rows = parse_manifest(&text).map_err(FetchError::from)?;
    let summary = session.load_manifest(rows, Some(label.clone()))?;

    LoadResult {
        source: label,
        summary,
    }
    .render(ctx.mode);
    Ok(())
}

async fn fetch(source: &SourceArgs, ctx: &Context) -> Result<(String, String), FetchError> {
    if let Some(path) = &source.file {
        return fetch_from(&FileManifestSource::new(path)).await;
    }
    if let Some(url) = &source.url {
        return fetch_from(&HttpManifestSource::new(ctx.http_client()?, url)).await;
    }
    let name = source.client.as_deref().unwrap_or_default();
    let sheet = ctx
        .config
        .client_sheet(name)
        .ok_or_else(|| FetchError::UnknownClient(name.to_string()))?;
    let remote = HttpManifestSource::new(ctx.http_client()?, sheet_export_url(sheet)).with_label(name);
    fetch_from(&remote).await
}

async fn fetch_from<S: ManifestSource + Sync>(source: &S) -> Result<(String, String), FetchError> {
    let text = source.fetch().await?;
    Ok((source.label(), text))
}
