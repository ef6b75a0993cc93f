use colored::{ColoredString, Colorize};
use teleskop_core::models::chart::LineChart;
use teleskop_core::routing::Route;
use teleskop_core::views::{
    assets::AssetsView,
    crypto_detail::CryptoDetailView,
    crypto_list::{CryptoListView, CryptoRow},
    format::ChangeDirection,
    navbar::Navbar,
    pagination::Paginator,
    static_pages::{ContactView, NotFoundView},
    stock_list::StockListView,
};
use teleskop_core::Page;

const SPARK: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn navbar(navbar: &Navbar, current: &Route) {
    let links: Vec<String> = navbar
        .links
        .iter()
        .map(|l| {
            let text = format!("{} ({})", l.label, l.route);
            if &l.route == current {
                text.bold().to_string()
            } else {
                text
            }
        })
        .collect();
    println!("{}  {}", navbar.brand.yellow().bold(), links.join("  "));
    println!();
}

pub fn page(page: &Page) {
    match page {
        Page::Home { stocks, crypto } => {
            stock_list(stocks);
            crypto_list(crypto);
        }
        Page::Assets(view) => assets(view),
        Page::Contact(view) => contact(view),
        Page::CryptoDetail(view) => crypto_detail(view),
        Page::NotFound(view) => not_found(view),
    }
}

fn heading(text: &str) {
    println!("{}", text.bold());
}

fn tint(text: &str, direction: Option<ChangeDirection>) -> ColoredString {
    match direction {
        Some(ChangeDirection::Up) => text.green(),
        Some(ChangeDirection::Down) => text.red(),
        None => text.normal(),
    }
}

/// Print a table with left-aligned columns. Cells carrying a direction
/// are coloured green or red.
fn table(columns: &[&str], rows: &[Vec<(String, Option<ChangeDirection>)>]) {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (i, (cell, _)) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, w)| format!("{:<w$}", c.to_uppercase(), w = *w))
        .collect();
    println!("{}", header.join("  ").bold());

    for row in rows {
        let cells: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|((cell, dir), w)| tint(&format!("{cell:<w$}", w = *w), *dir).to_string())
            .collect();
        println!("{}", cells.join("  "));
    }
}

fn pager(paginator: &Paginator) {
    let prev = if paginator.has_prev() { "< Previous" } else { "" };
    let next = if paginator.has_next() { "Next >" } else { "" };
    println!("{prev:<12}{}{next:>12}", paginator.label());
    println!();
}

fn sparkline(values: &[f64]) -> String {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    let span = hi - lo;
    values
        .iter()
        .map(|v| {
            if span <= 0.0 || !span.is_finite() {
                SPARK[SPARK.len() / 2]
            } else {
                let idx = ((v - lo) / span * (SPARK.len() - 1) as f64).round() as usize;
                SPARK[idx.min(SPARK.len() - 1)]
            }
        })
        .collect()
}

fn chart(chart: &LineChart) {
    if chart.is_empty() {
        println!("(no chart data)");
        return;
    }
    if let Some(title) = &chart.title {
        println!("{}", title.bold());
    }
    let first = chart.labels.first().map(String::as_str).unwrap_or_default();
    let last = chart.labels.last().map(String::as_str).unwrap_or_default();
    for ds in &chart.datasets {
        let (lo, hi) = ds
            .values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
        println!("{:<14} {}  ${lo:.2} – ${hi:.2}", ds.label, sparkline(&ds.values));
    }
    println!("{:<14} {first} → {last}", chart.x_axis_title);
    println!();
}

fn stock_list(view: &StockListView) {
    heading(&view.heading());
    if let Some(text) = view.state().placeholder() {
        println!("{text}\n");
        return;
    }
    if let Some(c) = view.chart() {
        chart(&c);
    }
    let rows: Vec<Vec<(String, Option<ChangeDirection>)>> = view
        .rows()
        .into_iter()
        .map(|r| {
            vec![
                (r.date, None),
                (r.open, None),
                (r.high, None),
                (r.low, None),
                (r.close, None),
                (r.volume, None),
                (r.adjusted_close, None),
                (r.change, Some(r.direction)),
            ]
        })
        .collect();
    table(&StockListView::COLUMNS, &rows);
    pager(view.paginator());
}

fn crypto_list(view: &CryptoListView) {
    heading(CryptoListView::HEADING);
    if let Some(text) = view.state().placeholder() {
        println!("{text}\n");
        return;
    }
    if !view.search().is_empty() {
        println!("Search: {} ({} matches)", view.search(), view.match_count());
    }
    let rows: Vec<Vec<(String, Option<ChangeDirection>)>> = view
        .rows()
        .into_iter()
        .map(|r: CryptoRow| {
            vec![
                (format!("{} [{}]", r.name, r.detail_path), None),
                (r.symbol, None),
                (r.price, None),
                (r.change_24h, r.direction),
                (r.market_cap, None),
                (r.volume, None),
            ]
        })
        .collect();
    table(&CryptoListView::COLUMNS, &rows);
    pager(view.paginator());
}

fn crypto_detail(view: &CryptoDetailView) {
    heading(&view.heading());
    match view.state().placeholder() {
        Some(text) => println!("{text}"),
        None => {
            if let Some(c) = view.chart() {
                chart(c);
            }
        }
    }
}

pub fn assets(view: &AssetsView) {
    heading(AssetsView::HEADING);
    if let Some(notice) = view.notice() {
        println!("{}", notice.red());
    }
    if !view.search().is_empty() {
        println!("Search: {}", view.search());
    }
    let rows: Vec<Vec<(String, Option<ChangeDirection>)>> = view
        .rows()
        .into_iter()
        .map(|r| {
            vec![
                (r.name, None),
                (r.quantity, None),
                (r.value, None),
                (r.change, Some(r.direction)),
                (format!("delete with --delete {}", r.id), None),
            ]
        })
        .collect();
    table(&AssetsView::COLUMNS, &rows);
    println!();
}

fn contact(view: &ContactView) {
    heading(view.heading);
    for line in &view.body {
        println!("{line}");
    }
}

fn not_found(view: &NotFoundView) {
    heading(view.heading);
    println!("{}", view.message);
    println!("Go back to Home ({})", view.home_path);
}
