use super::ErrorLedger;
use crate::document::{selector, DocumentView, Query, TextFilter};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Selector};

static OFF_PCT: Lazy<Selector> =
    Lazy::new(|| selector(r#"td[data-stat="off_pct"]"#).expect("static selector"));
static OFFENSE: Lazy<Selector> =
    Lazy::new(|| selector(r#"td[data-stat="offense"]"#).expect("static selector"));

const FULL_PARTICIPATION: &str = "100%";
const NO_PARTICIPATION: &str = "0%";

/// Offensive snaps for a team, derived from a snap-count table.
///
/// Picks the `100%` row when there is one, otherwise the first row whose
/// percentage is not `0%`, and scales that row's snap count by its
/// percentage. Records `snaps` and returns `""` when no usable row exists or
/// either cell does not parse.
pub fn participation_snaps(table: Option<ElementRef<'_>>, ledger: &mut ErrorLedger) -> String {
    match table.and_then(snaps_from_table) {
        Some(snaps) => snaps.to_string(),
        None => {
            ledger.record("snaps");
            String::new()
        }
    }
}

fn snaps_from_table(table: ElementRef<'_>) -> Option<i64> {
    let percent_cell = percent_cell(table)?;
    let row = DocumentView::parent_of(percent_cell)?;
    let count_cell = DocumentView::find_first_in(row, &Query::new(&OFFENSE))?;

    calculate(
        &DocumentView::text_of(percent_cell),
        &DocumentView::text_of(count_cell),
    )
}

fn percent_cell(table: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let full = Query::new(&OFF_PCT).with_text(TextFilter::exact(FULL_PARTICIPATION));
    let partial = Query::new(&OFF_PCT).with_text(TextFilter::except(NO_PARTICIPATION));

    DocumentView::find_first_in(table, &full)
        .or_else(|| DocumentView::find_first_in(table, &partial))
}

fn calculate(percent: &str, count: &str) -> Option<i64> {
    let leading = percent.trim().split('%').next()?;
    let percent: i64 = leading.trim().parse().ok()?;
    let count: i64 = count.trim().parse().ok()?;

    let snaps = percent as f64 * 0.01 * count as f64;
    Some(snaps.round_ties_even() as i64)
}
