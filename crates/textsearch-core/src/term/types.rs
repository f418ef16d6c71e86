//! Term and quad type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Datatype of plain literals, omitted from the canonical encoding
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

/// Datatype of language-tagged literals
pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

/// An RDF term.
///
/// Equality is structural: two literals are equal only when value, language
/// and datatype all match. Constructors and deserialization normalize
/// literals: language tags are lowercased and imply `rdf:langString`, a
/// missing datatype means `xsd:string`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "termType", from = "RawTerm")]
pub enum Term {
    NamedNode {
        value: String,
    },
    BlankNode {
        value: String,
    },
    Literal {
        value: String,
        #[serde(skip_serializing_if = "String::is_empty")]
        language: String,
        datatype: String,
    },
    DefaultGraph,
}

/// Wire shape of a term, before literal normalization
#[derive(Deserialize)]
#[serde(tag = "termType")]
enum RawTerm {
    NamedNode {
        value: String,
    },
    BlankNode {
        value: String,
    },
    Literal {
        value: String,
        #[serde(default)]
        language: String,
        #[serde(default)]
        datatype: Option<String>,
    },
    DefaultGraph,
}

impl From<RawTerm> for Term {
    fn from(raw: RawTerm) -> Self {
        match raw {
            RawTerm::NamedNode { value } => Term::NamedNode { value },
            RawTerm::BlankNode { value } => Term::BlankNode { value },
            RawTerm::Literal {
                value,
                language,
                datatype,
            } => {
                if !language.is_empty() {
                    Term::lang_literal(value, language)
                } else {
                    match datatype.filter(|d| !d.is_empty()) {
                        Some(datatype) => Term::typed_literal(value, datatype),
                        None => Term::literal(value),
                    }
                }
            }
            RawTerm::DefaultGraph => Term::DefaultGraph,
        }
    }
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Term::NamedNode { value: iri.into() }
    }

    pub fn blank(id: impl Into<String>) -> Self {
        Term::BlankNode { value: id.into() }
    }

    /// Plain `xsd:string` literal
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: String::new(),
            datatype: XSD_STRING.to_string(),
        }
    }

    /// Language-tagged literal; the tag is lowercased
    pub fn lang_literal(value: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: language.into().to_lowercase(),
            datatype: RDF_LANG_STRING.to_string(),
        }
    }

    pub fn typed_literal(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal {
            value: value.into(),
            language: String::new(),
            datatype: datatype.into(),
        }
    }

    pub fn default_graph() -> Self {
        Term::DefaultGraph
    }

    /// The term's value: IRI, blank node label, lexical form, or the empty
    /// string for the default graph.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode { value } | Term::BlankNode { value } | Term::Literal { value, .. } => {
                value
            }
            Term::DefaultGraph => "",
        }
    }

    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode { .. })
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode { .. })
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    /// Canonical N-Triples encoding.
    ///
    /// Distinct normalized terms encode to distinct strings, so the result
    /// is safe to use as a map key. The default graph encodes to `""`.
    pub fn to_ntriples(&self) -> String {
        match self {
            Term::NamedNode { value } => format!("<{}>", value),
            Term::BlankNode { value } => format!("_:{}", value),
            Term::Literal {
                value,
                language,
                datatype,
            } => {
                let mut out = String::with_capacity(value.len() + 2);
                out.push('"');
                escape_into(value, &mut out);
                out.push('"');
                if !language.is_empty() {
                    out.push('@');
                    out.push_str(language);
                } else if datatype != XSD_STRING {
                    out.push_str("^^<");
                    out.push_str(datatype);
                    out.push('>');
                }
                out
            }
            Term::DefaultGraph => String::new(),
        }
    }
}

fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
}

impl Default for Term {
    fn default() -> Self {
        Term::DefaultGraph
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ntriples())
    }
}

/// A subject-predicate-object statement within a graph
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quad {
    pub subject: Term,
    pub predicate: Term,
    pub object: Term,
    #[serde(default)]
    pub graph: Term,
}

impl Quad {
    pub fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }

    /// Quad in the default graph
    pub fn triple(subject: Term, predicate: Term, object: Term) -> Self {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    /// Returns true if every given pattern term equals the matching position.
    /// `None` acts as a wildcard.
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&Term>,
        object: Option<&Term>,
        graph: Option<&Term>,
    ) -> bool {
        subject.map_or(true, |s| *s == self.subject)
            && predicate.map_or(true, |p| *p == self.predicate)
            && object.map_or(true, |o| *o == self.object)
            && graph.map_or(true, |g| *g == self.graph)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if !self.graph.is_default_graph() {
            write!(f, " {}", self.graph)?;
        }
        f.write_str(" .")
    }
}
