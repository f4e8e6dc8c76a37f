use std::io::{self, Write};
use std::process::ExitCode;

use chrono::Local;
use emart_leaflets::logging::init_logging;
use emart_leaflets::{
    FixedInterval, HttpFetcher, LeafletConfig, RunOutcome, ScraperError, run_scraper,
};

fn main() -> ExitCode {
    init_logging();

    let result = run();
    report(&result, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn run() -> Result<RunOutcome, ScraperError> {
    let config = LeafletConfig::default();
    let fetcher = HttpFetcher::new(&config)?;
    let mut throttle = FixedInterval::new(config.download_interval);
    let today = Local::now().date_naive();

    run_scraper(&config, &fetcher, &mut throttle, today)
}

/// Prints the end-of-run message once and picks the exit status.
fn report(
    result: &Result<RunOutcome, ScraperError>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    // Console writes are best effort.
    match result {
        Ok(RunOutcome::NoImages) => {
            let _ = writeln!(out, "⚠️ 전단지 이미지를 찾을 수 없습니다.");
        }
        Ok(RunOutcome::Downloaded(summary)) => {
            let _ = writeln!(out, "\n--- 다운로드 완료 ---");
            let _ = writeln!(
                out,
                "🎉 {}/{}개 저장 ({} bytes) → {}",
                summary.saved(),
                summary.results.len(),
                summary.total_bytes(),
                summary.date_folder.display()
            );
            for failed in summary.results.iter().filter(|r| !r.success()) {
                let _ = writeln!(out, "  ❌ {:02}: {}", failed.ordinal, failed.url);
            }
        }
        Err(e) => {
            let _ = writeln!(err, "❌ 실행 중단: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
