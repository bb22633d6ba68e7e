//! Analytics series and the optional chart sink they are drawn through

/// One labelled data series
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl Series {
    fn new(title: &str, points: &[(&str, u64)]) -> Self {
        Self {
            title: title.to_string(),
            labels: points.iter().map(|(l, _)| l.to_string()).collect(),
            values: points.iter().map(|(_, v)| *v).collect(),
        }
    }
}

/// Chart kinds a sink can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

/// Charting backend. Analytics rendering is skipped without one.
pub trait ChartSink {
    fn draw(&mut self, kind: ChartKind, series: &Series);
}

/// Monthly registered users
pub fn user_growth() -> Series {
    Series::new(
        "Users",
        &[
            ("Jan", 5),
            ("Feb", 12),
            ("Mar", 25),
            ("Apr", 38),
            ("May", 52),
            ("Jun", 68),
        ],
    )
}

/// Downloads per weekday
pub fn weekly_downloads() -> Series {
    Series::new(
        "Downloads",
        &[
            ("Mon", 120),
            ("Tue", 190),
            ("Wed", 150),
            ("Thu", 220),
            ("Fri", 180),
            ("Sat", 250),
            ("Sun", 300),
        ],
    )
}

/// Song count per genre, genres in order of first appearance
pub fn genre_distribution<'a>(genres: impl IntoIterator<Item = &'a str>) -> Series {
    let mut counts: Vec<(&str, u64)> = Vec::new();
    for genre in genres {
        match counts.iter_mut().find(|(g, _)| *g == genre) {
            Some((_, n)) => *n += 1,
            None => counts.push((genre, 1)),
        }
    }
    Series::new("Genres", &counts)
}

/// Text chart sink drawing horizontal bars
#[derive(Debug, Default)]
pub struct TextChart {
    pub output: String,
}

impl ChartSink for TextChart {
    fn draw(&mut self, kind: ChartKind, series: &Series) {
        let max = series.values.iter().copied().max().unwrap_or(0).max(1);
        self.output
            .push_str(&format!("{} ({:?})\n", series.title, kind));
        for (label, value) in series.labels.iter().zip(&series.values) {
            let width = (value * 30).div_ceil(max) as usize;
            self.output
                .push_str(&format!("  {:<10} {} {}\n", label, "█".repeat(width), value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genres_keep_first_appearance_order() {
        let series = genre_distribution(["Rock", "Pop", "Rock"]);
        assert_eq!(series.labels, vec!["Rock", "Pop"]);
        assert_eq!(series.values, vec![2, 1]);
        assert!(genre_distribution([]).labels.is_empty());
    }

    #[test]
    fn fixed_series() {
        assert_eq!(user_growth().values, vec![5, 12, 25, 38, 52, 68]);
        assert_eq!(weekly_downloads().labels.len(), 7);
        assert_eq!(weekly_downloads().values[6], 300);
    }

    #[test]
    fn text_chart_scales_to_the_largest_value() {
        let mut chart = TextChart::default();
        chart.draw(ChartKind::Bar, &genre_distribution(["Rock", "Pop", "Rock"]));
        assert!(chart.output.starts_with("Genres (Bar)\n"));
        assert!(chart.output.contains(&format!("Rock       {} 2", "█".repeat(30))));
        assert!(chart.output.contains(&format!("Pop        {} 1", "█".repeat(15))));
    }
}
