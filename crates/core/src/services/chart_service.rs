use crate::models::chart::{ChartDataset, LineChart, Rgba};
use crate::models::market_chart::MarketChart;
use crate::models::price_bar::PriceBar;
use crate::views::format::{format_bar_date, format_sample_date};

const OPEN_COLOR: Rgba = Rgba::new(75, 192, 192, 1.0);
const CLOSE_COLOR: Rgba = Rgba::new(255, 99, 132, 1.0);
const CRYPTO_COLOR: Rgba = Rgba::new(248, 165, 33, 1.0);

/// Turns fetched series into render-ready `LineChart`s.
///
/// No I/O: the views hand in what they already hold.
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Open/close chart for a set of daily bars.
    ///
    /// Bars arrive newest first; the chart runs oldest to newest.
    pub fn stock_chart(&self, bars: &[PriceBar]) -> LineChart {
        let ordered: Vec<&PriceBar> = bars.iter().rev().collect();
        LineChart {
            title: None,
            labels: ordered.iter().map(|b| format_bar_date(b.date)).collect(),
            datasets: vec![
                ChartDataset {
                    label: "Open Price".into(),
                    values: ordered.iter().map(|b| b.open).collect(),
                    border_color: OPEN_COLOR,
                    background_color: OPEN_COLOR.with_alpha(0.2),
                    border_width: 1,
                    fill: true,
                    tooltip_label: None,
                },
                ChartDataset {
                    label: "Close Price".into(),
                    values: ordered.iter().map(|b| b.close).collect(),
                    border_color: CLOSE_COLOR,
                    background_color: CLOSE_COLOR.with_alpha(0.2),
                    border_width: 1,
                    fill: true,
                    tooltip_label: None,
                },
            ],
            x_axis_title: "Date".into(),
            y_axis_title: "Price".into(),
            begin_at_zero: false,
        }
    }

    /// Price chart for one coin. Samples with an out-of-range timestamp
    /// are dropped so labels and values stay aligned.
    pub fn crypto_chart(&self, id: &str, chart: &MarketChart, vs_currency: &str) -> LineChart {
        let (labels, values): (Vec<String>, Vec<f64>) = chart
            .prices
            .iter()
            .filter_map(|s| Some((format_sample_date(s.time()?), s.value())))
            .unzip();

        let axis = format!("Price ({})", vs_currency.to_uppercase());
        LineChart {
            title: Some(format!("{id} Detail")),
            labels,
            datasets: vec![ChartDataset {
                label: axis.clone(),
                values,
                border_color: CRYPTO_COLOR,
                background_color: CRYPTO_COLOR.with_alpha(0.2),
                border_width: 3,
                fill: true,
                tooltip_label: Some("Price".into()),
            }],
            x_axis_title: "Date".into(),
            y_axis_title: axis,
            begin_at_zero: false,
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
