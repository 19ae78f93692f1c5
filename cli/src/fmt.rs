use std::fmt;

use asset_upkeep::{
    CategoryWordList, icons::IconReport, logo::LogoReport,
    words::UpdateReport,
};

#[derive(Debug)]
pub struct ReportFormatter<'a, R> {
    report: &'a R,
    format: OutputFormat,
}

#[derive(Debug, Copy, Clone)]
pub enum OutputFormat {
    Human,
}

pub trait FormatReport: Sized {
    fn format(&self, format: OutputFormat) -> ReportFormatter<'_, Self> {
        ReportFormatter {
            report: self,
            format,
        }
    }
}

impl FormatReport for IconReport {}
impl FormatReport for LogoReport {}
impl FormatReport for UpdateReport {}
impl FormatReport for CategoryWordList {}

impl fmt::Display for ReportFormatter<'_, IconReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ReportFormatter { report, format } = *self;
        match format {
            OutputFormat::Human => {
                // The formatter shouldn't leave a trailing newline
                write!(f, "{} icons updated", report.updated)?;
                if !report.failures.is_empty() {
                    write!(f, ", {} failed:", report.failures.len())?;
                    report.failures.iter().try_for_each(|failure| {
                        write!(
                            f,
                            "\n  {}: {}",
                            failure.path.display(),
                            failure.error,
                        )
                    })?;
                }
            },
        }
        Ok(())
    }
}

impl fmt::Display for ReportFormatter<'_, LogoReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ReportFormatter { report, format } = *self;
        match format {
            OutputFormat::Human => {
                let bounds = report.bounds;
                write!(
                    f,
                    "logo found at ({}, {})..({}, {}), now {}x{}",
                    bounds.x0,
                    bounds.y0,
                    bounds.x1,
                    bounds.y1,
                    report.scaled.0,
                    report.scaled.1,
                )
            },
        }
    }
}

impl fmt::Display for ReportFormatter<'_, UpdateReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ReportFormatter { report, format } = *self;
        match format {
            OutputFormat::Human => write!(
                f,
                "updated {} in {} ({} -> {} words, {})",
                report.category,
                report.path.display(),
                report.previous,
                report.entries,
                report.mode,
            ),
        }
    }
}

impl fmt::Display for ReportFormatter<'_, CategoryWordList> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ReportFormatter {
            report: word_list,
            format,
        } = *self;
        match format {
            OutputFormat::Human => {
                write!(f, "{:<24} {:>4} words", word_list.name(), word_list.len())?;
                if word_list.requires_validation() {
                    f.write_str(", tiered")?;
                }
                if let Some(display_name) = word_list.display_name() {
                    write!(f, ", renames to \"{display_name}\"")?;
                }
                Ok(())
            },
        }
    }
}
