use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Offset, OffsetRange};
use crate::{CommonError, CommonResult, Symbol};

/// A range of text labeled with a type and free-form string attributes.
///
/// Attributes are copied into an owned map on construction and kept sorted
/// by key, so the rendering is deterministic regardless of how the caller
/// built its map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound(deserialize = "O: Offset + Deserialize<'de>"))]
pub struct AnnotatedOffsetRange<O> {
    span_type: Symbol,
    range: OffsetRange<O>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    attributes: BTreeMap<String, String>,
}

impl<O: Offset> AnnotatedOffsetRange<O> {
    pub fn create(span_type: Symbol, range: OffsetRange<O>) -> Self {
        AnnotatedOffsetRange {
            span_type,
            range,
            attributes: BTreeMap::new(),
        }
    }

    pub fn create_with_attributes<I, K, V>(
        span_type: Symbol,
        range: OffsetRange<O>,
        attributes: I,
    ) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        AnnotatedOffsetRange {
            span_type,
            range,
            attributes: attributes
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn builder() -> AnnotatedOffsetRangeBuilder<O> {
        AnnotatedOffsetRangeBuilder::default()
    }

    pub fn range(&self) -> OffsetRange<O> {
        self.range
    }

    pub fn span_type(&self) -> &Symbol {
        &self.span_type
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

impl<O: fmt::Display> fmt::Display for AnnotatedOffsetRange<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}: {}", self.span_type, self.range)?;
        if !self.attributes.is_empty() {
            f.write_str(" {")?;
            for (idx, (key, value)) in self.attributes.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}={}", key, value)?;
            }
            f.write_str("}")?;
        }
        f.write_str("]")
    }
}

/// Builder for [`AnnotatedOffsetRange`] when the type or range may be
/// missing, e.g. while reading annotations field by field.
#[derive(Debug, Clone)]
pub struct AnnotatedOffsetRangeBuilder<O> {
    span_type: Option<Symbol>,
    range: Option<OffsetRange<O>>,
    attributes: BTreeMap<String, String>,
}

impl<O> Default for AnnotatedOffsetRangeBuilder<O> {
    fn default() -> Self {
        Self {
            span_type: None,
            range: None,
            attributes: BTreeMap::new(),
        }
    }
}

impl<O: Offset> AnnotatedOffsetRangeBuilder<O> {
    pub fn span_type(mut self, span_type: Symbol) -> Self {
        self.span_type = Some(span_type);
        self
    }

    pub fn range(mut self, range: OffsetRange<O>) -> Self {
        self.range = Some(range);
        self
    }

    /// Adds one attribute, replacing any earlier value for the same key.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> CommonResult<AnnotatedOffsetRange<O>> {
        let span_type = self
            .span_type
            .ok_or_else(|| CommonError::invalid_argument("annotated range has no type"))?;
        let range = self
            .range
            .ok_or_else(|| CommonError::invalid_argument("annotated range has no range"))?;
        Ok(AnnotatedOffsetRange {
            span_type,
            range,
            attributes: self.attributes,
        })
    }
}

/// Projects annotated ranges down to their bare ranges, for range-only
/// algorithms.
pub fn ranges_of<'a, O, I>(annotated: I) -> Vec<OffsetRange<O>>
where
    O: Offset + 'a,
    I: IntoIterator<Item = &'a AnnotatedOffsetRange<O>>,
{
    annotated.into_iter().map(AnnotatedOffsetRange::range).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CharOffset;
    use std::collections::HashMap;

    fn range(start: usize, end: usize) -> OffsetRange<CharOffset> {
        OffsetRange::char_range(start, end).unwrap()
    }

    #[test]
    fn renders_without_attributes() {
        let per = AnnotatedOffsetRange::create(Symbol::from("PER"), range(0, 4));
        insta::assert_snapshot!(per, @"[PER: [0,4)]");
    }

    #[test]
    fn renders_with_attributes() {
        let per = AnnotatedOffsetRange::create_with_attributes(
            Symbol::from("PER"),
            range(0, 4),
            vec![("conf", "0.9")],
        );
        insta::assert_snapshot!(per, @"[PER: [0,4) {conf=0.9}]");
    }

    #[test]
    fn renders_attributes_sorted_by_key() {
        let org = AnnotatedOffsetRange::create_with_attributes(
            Symbol::from("ORG"),
            range(10, 17),
            vec![("source", "gold"), ("conf", "1.0")],
        );
        insta::assert_snapshot!(org, @"[ORG: [10,17) {conf=1.0, source=gold}]");
    }

    #[test]
    fn attributes_are_copied() {
        let mut attrs = HashMap::new();
        attrs.insert("conf".to_string(), "0.9".to_string());

        let per = AnnotatedOffsetRange::create_with_attributes(
            Symbol::from("PER"),
            range(0, 4),
            attrs.clone(),
        );
        attrs.insert("conf".to_string(), "0.1".to_string());
        attrs.insert("extra".to_string(), "x".to_string());

        assert_eq!(per.attributes().len(), 1);
        assert_eq!(per.attributes().get("conf").map(String::as_str), Some("0.9"));
    }

    #[test]
    fn accessors() {
        let per = AnnotatedOffsetRange::create(Symbol::from("PER"), range(2, 6));
        assert_eq!(per.span_type(), &Symbol::from("PER"));
        assert_eq!(per.range(), range(2, 6));
        assert!(per.attributes().is_empty());
    }

    #[test]
    fn builder_requires_type_and_range() {
        let missing_type = AnnotatedOffsetRange::<CharOffset>::builder()
            .range(range(0, 1))
            .build()
            .unwrap_err();
        assert_eq!(missing_type.message(), "annotated range has no type");

        let missing_range = AnnotatedOffsetRange::<CharOffset>::builder()
            .span_type(Symbol::from("PER"))
            .build()
            .unwrap_err();
        assert_eq!(missing_range.message(), "annotated range has no range");
    }

    #[test]
    fn builder_with_attributes() {
        let loc = AnnotatedOffsetRange::builder()
            .span_type(Symbol::from("LOC"))
            .range(range(5, 11))
            .attribute("mention", "NAM")
            .build()
            .unwrap();
        assert_eq!(loc.to_string(), "[LOC: [5,11) {mention=NAM}]");
    }

    #[test]
    fn projects_ranges() {
        let spans = vec![
            AnnotatedOffsetRange::create(Symbol::from("PER"), range(0, 4)),
            AnnotatedOffsetRange::create(Symbol::from("ORG"), range(8, 12)),
        ];
        assert_eq!(ranges_of(&spans), vec![range(0, 4), range(8, 12)]);
    }

    #[test]
    fn serde_round_trip() {
        let per = AnnotatedOffsetRange::create_with_attributes(
            Symbol::from("PER"),
            range(0, 4),
            vec![("conf", "0.9")],
        );
        let text = ron::to_string(&per).unwrap();
        let back: AnnotatedOffsetRange<CharOffset> = ron::from_str(&text).unwrap();
        assert_eq!(back, per);
    }
}
