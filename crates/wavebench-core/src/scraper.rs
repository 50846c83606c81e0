//! Elapsed-time extraction from captured solver output.
//!
//! The solver prints a line such as `Simulación completada en 3,250000 segundos`.
//! A line is selected when it contains the marker phrase; the elapsed time is
//! the second-to-last whitespace-separated token, with a comma decimal
//! separator accepted.

use crate::error::ScrapeError;
use crate::policy::MatchMode;

/// Finds marker lines in solver output and parses their elapsed time.
#[derive(Debug, Clone)]
pub struct Scraper {
    marker: String,
    mode: MatchMode,
}

impl Scraper {
    #[must_use]
    pub fn new(marker: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            marker: marker.into(),
            mode,
        }
    }

    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Lines of `stdout` containing the marker, in output order.
    ///
    /// In [`MatchMode::First`] at most one line is yielded.
    pub fn matching_lines<'a>(&'a self, stdout: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        let limit = match self.mode {
            MatchMode::First => 1,
            MatchMode::All => usize::MAX,
        };
        stdout
            .lines()
            .filter(move |line| line.contains(self.marker.as_str()))
            .take(limit)
    }

    /// Parse every selected line. An empty vector means no marker was found.
    #[must_use]
    pub fn scrape(&self, stdout: &str) -> Vec<Result<f64, ScrapeError>> {
        self.matching_lines(stdout).map(parse_elapsed).collect()
    }
}

/// Parse the elapsed time carried by a marker line.
pub fn parse_elapsed(line: &str) -> Result<f64, ScrapeError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(ScrapeError::MissingToken(line.to_string()));
    }
    let token = tokens[tokens.len() - 2];
    let value: f64 = token
        .replace(',', ".")
        .parse()
        .map_err(|_| ScrapeError::InvalidNumber {
            token: token.to_string(),
        })?;
    if !value.is_finite() || value < 0.0 {
        return Err(ScrapeError::InvalidValue(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PAR: &str = "Simulación completada en";
    const SEQ: &str = "Tiempo de ejecución:";

    #[test]
    fn parses_comma_decimal() {
        assert_eq!(parse_elapsed("Simulación completada en 3,250000 segundos"), Ok(3.25));
    }

    #[test]
    fn parses_period_decimal() {
        assert_eq!(parse_elapsed("Tiempo de ejecución: 0.500000 segundos"), Ok(0.5));
    }

    #[test]
    fn rejects_non_numeric_token() {
        assert_eq!(
            parse_elapsed("Simulación completada en abc segundos"),
            Err(ScrapeError::InvalidNumber { token: "abc".into() })
        );
    }

    #[test]
    fn rejects_short_line() {
        assert!(matches!(parse_elapsed("done"), Err(ScrapeError::MissingToken(_))));
        assert!(matches!(parse_elapsed(""), Err(ScrapeError::MissingToken(_))));
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(matches!(
            parse_elapsed("Tiempo de ejecución: -1,0 segundos"),
            Err(ScrapeError::InvalidValue(_))
        ));
        assert!(matches!(
            parse_elapsed("Tiempo de ejecución: NaN segundos"),
            Err(ScrapeError::InvalidValue(_))
        ));
    }

    #[test]
    fn sequential_solver_output() {
        let out = "Simulación completada. Resultados guardados en wave_output.txt.\n\
                   Tiempo de ejecución: 12,345678 segundos\n";
        let scraper = Scraper::new(SEQ, MatchMode::First);
        assert_eq!(scraper.scrape(out), vec![Ok(12.345_678)]);
    }

    #[test]
    fn no_marker_yields_nothing() {
        let scraper = Scraper::new(PAR, MatchMode::All);
        assert!(scraper.scrape("hello\nworld\n").is_empty());
        assert!(scraper.scrape("").is_empty());
    }

    #[test]
    fn first_mode_takes_one_line() {
        let out = format!("{PAR} 1,0 s\nnoise\n{PAR} 2,0 s\n");
        let scraper = Scraper::new(PAR, MatchMode::First);
        assert_eq!(scraper.scrape(&out), vec![Ok(1.0)]);
    }

    #[test]
    fn all_mode_takes_every_line() {
        let out = format!("{PAR} 1,0 s\nnoise\n{PAR} 2,0 s\n");
        let scraper = Scraper::new(PAR, MatchMode::All);
        assert_eq!(scraper.scrape(&out), vec![Ok(1.0), Ok(2.0)]);
    }

    #[test]
    fn first_mode_reports_bad_first_line() {
        let out = format!("{PAR} abc s\n{PAR} 2,0 s\n");
        let scraper = Scraper::new(PAR, MatchMode::First);
        let parsed = scraper.scrape(&out);
        assert_eq!(parsed.len(), 1);
        assert!(parsed[0].is_err());
    }

    #[test]
    fn handles_crlf_output() {
        let out = format!("{PAR} 0,75 segundos\r\n");
        let scraper = Scraper::new(PAR, MatchMode::First);
        assert_eq!(scraper.scrape(&out), vec![Ok(0.75)]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Values printed the way the solver prints them are recovered to 1e-6.
        #[test]
        fn recovers_printed_value(secs in 0.0f64..100_000.0) {
            let printed = format!("{secs:.6}").replace('.', ",");
            let line = format!("{PAR} {printed} segundos");
            let parsed = parse_elapsed(&line).unwrap();
            prop_assert!((parsed - secs).abs() <= 1e-6);
        }
    }
}
