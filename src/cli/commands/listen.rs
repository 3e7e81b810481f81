//! Read scanner input from stdin
//!
//! Scanners behave like a keyboard: characters arrive one by one and a code
//! is complete once input goes quiet for the debounce delay. A line break
//! completes the pending code at once, so scanners configured with an Enter
//! suffix (and piped input) need not wait.

use std::io::{self, ErrorKind, Read};
use std::thread;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;
use tokio::time::sleep_until;

use dockscan::core::services::{Debouncer, Session};
use dockscan::output::{OutputMode, receipt_line};

use super::{Context, runtime};

const READ_CHUNK: usize = 1024;

/// Submit debounced codes from stdin until end of input or Ctrl-C
pub fn listen(debounce_ms: Option<u64>, ctx: &Context) -> anyhow::Result<()> {
    let delay = debounce_ms.map_or_else(|| ctx.config.scan.debounce(), Duration::from_millis);
    let mut session = ctx.open_session();

    if ctx.mode == OutputMode::Human {
        if session.state().is_empty() {
            println!("No manifest loaded; scans will be logged as unmatched.");
        }
        println!(
            "Listening for scans ({} ms debounce). Press Ctrl-D or Ctrl-C to stop.",
            delay.as_millis()
        );
    }

    let chunks = spawn_stdin_reader()?;
    let rt = runtime()?;
    let result = rt.block_on(read_loop(&mut session, ScanInput::new(delay), chunks, ctx.mode));
    rt.shutdown_background();
    result
}

/// Read stdin on its own thread so a pending read never holds up shutdown
fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<io::Result<Vec<u8>>>> {
    let (tx, rx) = mpsc::channel(16);
    thread::Builder::new().name("stdin".to_string()).spawn(move || {
        let mut stdin = io::stdin().lock();
        let mut buf = [0u8; READ_CHUNK];
        loop {
            let chunk = match stdin.read(&mut buf) {
                Ok(0) => return,
                Ok(n) => Ok(buf[..n].to_vec()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => Err(err),
            };
            let failed = chunk.is_err();
            if tx.blocking_send(chunk).is_err() || failed {
                return;
            }
        }
    })?;
    Ok(rx)
}

async fn read_loop(
    session: &mut Session,
    mut input: ScanInput,
    mut chunks: mpsc::Receiver<io::Result<Vec<u8>>>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        let deadline = input.debouncer.deadline();
        let wake = deadline.map_or_else(tokio::time::Instant::now, tokio::time::Instant::from_std);

        // Polling the interrupt first registers its handler before any receipt is printed
        tokio::select! {
            biased;

            interrupted = &mut ctrl_c => {
                interrupted?;
                let pending = input.debouncer.pending().trim();
                if !pending.is_empty() {
                    log::warn!("discarding unfinished input {pending:?}");
                }
                input.debouncer.cancel();
                return Ok(());
            }
            chunk = chunks.recv() => {
                let Some(chunk) = chunk else {
                    break;
                };
                for code in input.feed(&chunk?, Instant::now()) {
                    submit(session, &code, mode)?;
                }
            }
            () = sleep_until(wake), if deadline.is_some() => {
                if let Some(code) = input.debouncer.poll(Instant::now()) {
                    submit(session, &code, mode)?;
                }
            }
        }
    }

    if let Some(code) = input.flush() {
        submit(session, &code, mode)?;
    }
    Ok(())
}

/// Scanner input: the debouncer plus any UTF-8 sequence cut off by the
/// previous read
struct ScanInput {
    debouncer: Debouncer,
    carry: Vec<u8>,
}

impl ScanInput {
    const fn new(delay: Duration) -> Self {
        Self {
            debouncer: Debouncer::new(delay),
            carry: Vec::new(),
        }
    }

    /// Push a chunk of input; returns the codes completed by line breaks
    fn feed(&mut self, chunk: &[u8], now: Instant) -> Vec<String> {
        let text = self.decode(chunk);
        let mut completed = Vec::new();
        let mut parts = text.split('\n').peekable();

        while let Some(part) = parts.next() {
            self.debouncer.input(part, now);
            if parts.peek().is_some() {
                match self.debouncer.flush() {
                    Some(code) => completed.push(code),
                    None => self.debouncer.cancel(),
                }
            }
        }
        completed
    }

    /// End of input: submit what is pending
    fn flush(&mut self) -> Option<String> {
        if !self.carry.is_empty() {
            let tail = String::from_utf8_lossy(&std::mem::take(&mut self.carry)).into_owned();
            self.debouncer.input(&tail, Instant::now());
        }
        self.debouncer.flush()
    }

    /// Decode a chunk, holding back a trailing incomplete character
    fn decode(&mut self, chunk: &[u8]) -> String {
        self.carry.extend_from_slice(chunk);
        let incomplete = match std::str::from_utf8(&self.carry) {
            Err(err) if err.error_len().is_none() => self.carry.len() - err.valid_up_to(),
            _ => 0,
        };
        let tail = self.carry.split_off(self.carry.len() - incomplete);
        let text = String::from_utf8_lossy(&self.carry).into_owned();
        self.carry = tail;
        text
    }
}

fn submit(session: &mut Session, code: &str, mode: OutputMode) -> anyhow::Result<()> {
    let receipt = session.submit_scan(code, chrono::Local::now().time())?;
    let state = session.state();
    match mode {
        OutputMode::Human => {
            println!("{}", receipt_line(&receipt));
            println!("  Units unloaded: {} of {}", state.global_accepted, state.total_expected);
        },
        OutputMode::Json => println!("{}", serde_json::to_string(&receipt)?),
    }
    Ok(())
}
