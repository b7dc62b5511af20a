// Demo gallery: one worked example per helper
//
// `readable demo` prints every section as aligned text; `readable demo --json`
// emits the same gallery as JSON for tooling. All inputs are fixed, so the
// output is identical from run to run.

use crate::datetime::{self, DateTimeProvider};
use crate::error::Result;
use crate::size::{format_byte_size, UnitBase};
use crate::{
    format_decimal, format_decimal_or_integer, format_human_number, format_integer,
    format_ordinal, format_percentage, spell_out,
};
use serde::Serialize;

/// Sample timestamp used by the date sections
const SAMPLE_DATE: &str = "2020-08-26 17:38:23";
const SAMPLE_OLD: &str = "2020-01-22 05:58:00 UTC";
const SAMPLE_NEW: &str = "2020-01-23 05:58:00 UTC";

/// Shown when a helper has nothing to display
const NO_RESULT: &str = "(no result)";

/// One call and what it produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub call: String,
    pub output: String,
}

/// A titled group of samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub samples: Vec<Sample>,
}

impl Section {
    fn new(title: &'static str, description: &'static str) -> Self {
        Self {
            title,
            description,
            samples: Vec::new(),
        }
    }

    fn sample(mut self, call: impl Into<String>, output: impl Into<String>) -> Self {
        self.samples.push(Sample {
            call: call.into(),
            output: output.into(),
        });
        self
    }
}

/// Build the gallery; dates are parsed by `provider`
pub fn gallery(provider: &impl DateTimeProvider) -> Result<Vec<Section>> {
    let no_result = |value: Option<String>| value.unwrap_or_else(|| NO_RESULT.to_string());

    let numbers = Section::new("Numbers", "Plain integers with a thousands delimiter.")
        .sample("format_integer(1234567890, \",\")", format_integer(1234567890, ","))
        .sample("format_integer(-1234567, \" \")", format_integer(-1234567, " "));

    let human = Section::new(
        "Human Numbers",
        "Large values as social-style abbreviations.",
    )
    .sample(
        "format_human_number(1524999, true, 0)",
        format_human_number(1524999, true, 0)?,
    )
    .sample(
        "format_human_number(1524999, true, 2)",
        format_human_number(1524999, true, 2)?,
    )
    .sample(
        "format_human_number(-3400000, false, 0)",
        format_human_number(-3400000, false, 0)?,
    );

    let words = Section::new("Spelled Out", "Numbers as English words.")
        .sample("spell_out(12345)", spell_out(12345)?)
        .sample("spell_out(-42)", spell_out(-42)?)
        .sample("spell_out(2.75)", spell_out(2.75)?);

    let decimals = Section::new("Decimals", "Fixed precision with custom separators.")
        .sample(
            "format_decimal(1234.567, 2, \".\", \",\")",
            format_decimal(1234.567, 2, ".", ",")?,
        )
        .sample(
            "format_decimal(1234.567, 2, \",\", \".\")",
            format_decimal(1234.567, 2, ",", ".")?,
        )
        .sample(
            "format_decimal_or_integer(200.0, 2, \".\", \",\")",
            format_decimal_or_integer(200.0, 2, ".", ",")?,
        )
        .sample(
            "format_decimal_or_integer(123.45, 2, \".\", \",\")",
            format_decimal_or_integer(123.45, 2, ".", ",")?,
        );

    let ordinals = Section::new("Ordinals", "Counting words for positions.")
        .sample("format_ordinal(1)", format_ordinal(1))
        .sample("format_ordinal(12)", format_ordinal(12))
        .sample("format_ordinal(103)", format_ordinal(103));

    let percentages = Section::new("Percentages", "A share of a total.")
        .sample(
            "format_percentage(50, 200, 2, \".\", \",\")",
            no_result(format_percentage(50, 200, 2, ".", ",")?),
        )
        .sample(
            "format_percentage(1, 3, 1, \".\", \",\")",
            no_result(format_percentage(1, 3, 1, ".", ",")?),
        )
        .sample(
            "format_percentage(5, 0, 2, \".\", \",\")",
            no_result(format_percentage(5, 0, 2, ".", ",")?),
        );

    let dates = Section::new("Date & Time", "Timestamps as calendar dates and clock times.")
        .sample(
            format!("format_date({:?})", SAMPLE_DATE),
            datetime::format_date(provider, SAMPLE_DATE, None)?,
        )
        .sample(
            format!("format_time({:?}, true)", SAMPLE_DATE),
            datetime::format_time(provider, SAMPLE_DATE, true, None)?,
        )
        .sample(
            format!("format_date_time({:?}, false)", SAMPLE_DATE),
            datetime::format_date_time(provider, SAMPLE_DATE, false, None)?,
        );

    let relative = Section::new("Relative Dates", "Comparing two points in time.")
        .sample(
            "format_diff(old, new)",
            datetime::format_diff(provider, SAMPLE_OLD, SAMPLE_NEW, None)?,
        )
        .sample(
            "format_time_length(3661, \", \", true)",
            datetime::format_time_length(3661, ", ", true),
        )
        .sample(
            "format_date_time_length(new, old, \" \")",
            datetime::format_date_time_length(provider, SAMPLE_NEW, SAMPLE_OLD, " ", None)?,
        );

    let sizes = Section::new("File Size", "Byte counts in decimal or binary units.")
        .sample(
            "format_byte_size(1500, Decimal)",
            no_result(format_byte_size(1500, UnitBase::Decimal)),
        )
        .sample(
            "format_byte_size(1048576, Binary)",
            no_result(format_byte_size(1024 * 1024, UnitBase::Binary)),
        );

    Ok(vec![
        numbers,
        human,
        words,
        decimals,
        ordinals,
        percentages,
        dates,
        relative,
        sizes,
    ])
}

/// Plain-text rendering: a heading per section, calls aligned in a column
pub fn render_text(sections: &[Section]) -> String {
    let width = sections
        .iter()
        .flat_map(|s| s.samples.iter())
        .map(|sample| sample.call.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}\n  {}\n", section.title, section.description));
        for sample in &section.samples {
            out.push_str(&format!(
                "  {:<width$}  =>  {}\n",
                sample.call,
                sample.output,
                width = width
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datetime::ChronoProvider;

    fn output_of<'a>(sections: &'a [Section], call: &str) -> &'a str {
        sections
            .iter()
            .flat_map(|s| s.samples.iter())
            .find(|sample| sample.call == call)
            .map(|sample| sample.output.as_str())
            .unwrap_or_else(|| panic!("no sample {:?}", call))
    }

    #[test]
    fn test_gallery_outputs() {
        let sections = gallery(&ChronoProvider).unwrap();

        assert_eq!(
            output_of(&sections, "format_integer(1234567890, \",\")"),
            "1,234,567,890"
        );
        assert_eq!(
            output_of(&sections, "format_human_number(1524999, true, 2)"),
            "1.52M"
        );
        assert_eq!(
            output_of(&sections, "format_human_number(-3400000, false, 0)"),
            "-3M"
        );
        assert_eq!(output_of(&sections, "spell_out(-42)"), "minus forty-two");
        assert_eq!(
            output_of(&sections, "format_decimal_or_integer(200.0, 2, \".\", \",\")"),
            "200"
        );
        assert_eq!(
            output_of(&sections, "format_percentage(5, 0, 2, \".\", \",\")"),
            NO_RESULT
        );
        assert_eq!(output_of(&sections, "format_diff(old, new)"), "1 day before");
        assert_eq!(
            output_of(&sections, "format_date_time_length(new, old, \" \")"),
            "1 day after"
        );
        assert_eq!(
            output_of(&sections, "format_byte_size(1048576, Binary)"),
            "1 MiB"
        );
    }

    #[test]
    fn test_render_text_aligns_calls() {
        let sections = vec![Section::new("T", "d")
            .sample("a()", "1")
            .sample("longer()", "2")];
        let text = render_text(&sections);
        assert_eq!(text, "T\n  d\n  a()       =>  1\n  longer()  =>  2\n");
    }

    #[test]
    fn test_gallery_serializes_to_json() {
        let sections = gallery(&ChronoProvider).unwrap();
        let json = serde_json::to_value(&sections).unwrap();
        assert_eq!(json[0]["title"], "Numbers");
        assert_eq!(json[0]["samples"][1]["output"], "-1 234 567");
    }
}
