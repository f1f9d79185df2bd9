use std::fmt;

use log::trace;

use crate::dsl::{parse_rule, ParsedRule};
use crate::error::Result;
use crate::variable::LinguisticVariable;

/// Rule texts in insertion order, plus their parsed form.
///
/// The text is authoritative. The parsed form is a cache which is dropped
/// whenever the variables it was resolved against may have changed.
#[derive(Clone, Debug)]
pub struct Rules {
    texts: Vec<String>,
    parsed: Option<Vec<ParsedRule>>,
}

impl Rules {
    pub fn new() -> Self {
        Rules {
            texts: Vec::new(),
            parsed: Some(Vec::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.texts.get(index).map(String::as_str)
    }

    /// Parses `text` and appends it. A rule which fails to parse is not added.
    pub(crate) fn add(
        &mut self,
        text: impl Into<String>,
        inputs: &[LinguisticVariable],
        outputs: &[LinguisticVariable],
    ) -> Result<()> {
        let text = text.into();
        let rule = parse_rule(&text, inputs, outputs)?;

        if let Some(parsed) = &mut self.parsed {
            parsed.push(rule);
        }

        self.texts.push(text);

        Ok(())
    }

    pub(crate) fn invalidate(&mut self) {
        self.parsed = None;
    }

    /// Parsed rules, re-parsing every text if the cache was invalidated
    pub(crate) fn parsed(&mut self, inputs: &[LinguisticVariable], outputs: &[LinguisticVariable]) -> Result<&[ParsedRule]> {
        if self.parsed.is_none() {
            trace!("re-parsing {} rules", self.texts.len());

            let parsed = self
                .texts
                .iter()
                .map(|text| parse_rule(text, inputs, outputs))
                .collect::<Result<Vec<_>>>()?;

            self.parsed = Some(parsed);
        }

        Ok(self.parsed.as_deref().unwrap_or_default())
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "System contains {} rules of inferential mechanism:", self.len())?;

        for (i, text) in self.iter().enumerate() {
            writeln!(f, "{i:3}: {text}")?;
        }

        Ok(())
    }
}

#[test]
fn test_add_and_cache() {
    use crate::dsl::tests::variables;
    use crate::dsl::Clause;
    use crate::error::FuzzyError;

    let (inputs, outputs) = variables();
    let mut rules = Rules::new();

    rules.add("if x is zero then y is zero", &inputs, &outputs).unwrap();
    assert!(matches!(
        rules.add("if x is huge then y is zero", &inputs, &outputs),
        Err(FuzzyError::UnknownName { .. })
    ));
    assert_eq!(rules.len(), 1);

    rules.invalidate();
    rules.add("if w is negative then y is positive", &inputs, &outputs).unwrap();

    let parsed = rules.parsed(&inputs, &outputs).unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].antecedents, vec![Clause { variable: 1, term: 0 }]);
    assert_eq!(parsed[1].consequent, Clause { variable: 0, term: 2 });

    // A name that has since disappeared fails the re-parse
    rules.invalidate();
    assert!(rules.parsed(&inputs, &outputs[..0]).is_err());
}

#[test]
fn test_display() {
    use crate::dsl::tests::variables;

    let (inputs, outputs) = variables();
    let mut rules = Rules::new();

    rules.add("if x is zero then y is zero", &inputs, &outputs).unwrap();
    rules.add("if x is negative then y is positive", &inputs, &outputs).unwrap();

    assert_eq!(
        rules.to_string(),
        "System contains 2 rules of inferential mechanism:\n  \
         0: if x is zero then y is zero\n  \
         1: if x is negative then y is positive\n"
    );
}
