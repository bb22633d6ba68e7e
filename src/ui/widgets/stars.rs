use crate::ui::theme::{STAR_EMPTY, STAR_FILLED};

/// Five-star bar; star `i` is filled when `i <= rating`
pub fn stars(rating: f64) -> String {
    (1..=5)
        .map(|i| {
            if f64::from(i) <= rating {
                STAR_FILLED
            } else {
                STAR_EMPTY
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_ratings_round_down() {
        assert_eq!(stars(0.0), "☆☆☆☆☆");
        assert_eq!(stars(4.5), "★★★★☆");
        assert_eq!(stars(5.0), "★★★★★");
    }
}
