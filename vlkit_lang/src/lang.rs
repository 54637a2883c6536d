//! Language standard selection and symbol classification.
//!
//! Classification is parameterized by a [`Standard`].  The standards form
//! a partial order: every IEEE 1800 revision subsumes its predecessor and
//! the final 1364 revision, while Verilog-AMS branches off 1364-2005 and
//! is incomparable with the 1800 line.  A [`Language`] value owns the
//! flattened keyword view for one standard and can be freely carried
//! around by callers that need re-entrancy; the module-level functions
//! operate on a single process-wide [`Language`] for callers that don't.

use crate::keywords;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Selects the recognized language standard.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Standard {
    /// IEEE 1364-1995.
    Verilog1995,
    /// IEEE 1364-2001.
    Verilog2001,
    /// IEEE 1364-2005.
    Verilog2005,
    /// IEEE 1800-2005.
    SystemVerilog2005,
    /// IEEE 1800-2009.
    SystemVerilog2009,
    /// IEEE 1800-2012.
    SystemVerilog2012,
    /// IEEE 1800-2017.
    SystemVerilog2017,
    /// Verilog-AMS (1364-2005-based).
    VerilogAms,
}

/// Returned when a standard name matches neither a canonical name nor an
/// accepted alias.  Carries the offending input.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[error("unknown Verilog language standard `{0}`")]
pub struct BadStandard(pub Box<str>);

impl Standard {
    /// The canonical dashed name, as used by `` `begin_keywords `` and
    /// returned by classification queries.
    pub fn as_str(self) -> &'static str {
        match self {
            Standard::Verilog1995 => "1364-1995",
            Standard::Verilog2001 => "1364-2001",
            Standard::Verilog2005 => "1364-2005",
            Standard::SystemVerilog2005 => "1800-2005",
            Standard::SystemVerilog2009 => "1800-2009",
            Standard::SystemVerilog2012 => "1800-2012",
            Standard::SystemVerilog2017 => "1800-2017",
            Standard::VerilogAms => "VAMS",
        }
    }

    /// The numerically greatest 1800 standard supported.
    pub fn latest() -> Standard {
        Standard::SystemVerilog2017
    }

    /// The standards whose symbols make up this standard's flattened
    /// keyword set, oldest first.
    pub fn basis(self) -> &'static [Standard] {
        match self {
            Standard::Verilog1995 => &[Standard::Verilog1995],
            Standard::Verilog2001 => &[Standard::Verilog1995, Standard::Verilog2001],
            Standard::Verilog2005 => &[
                Standard::Verilog1995,
                Standard::Verilog2001,
                Standard::Verilog2005,
            ],
            Standard::SystemVerilog2005 => &[
                Standard::Verilog1995,
                Standard::Verilog2001,
                Standard::Verilog2005,
                Standard::SystemVerilog2005,
            ],
            Standard::SystemVerilog2009 => &[
                Standard::Verilog1995,
                Standard::Verilog2001,
                Standard::Verilog2005,
                Standard::SystemVerilog2005,
                Standard::SystemVerilog2009,
            ],
            Standard::SystemVerilog2012 => &[
                Standard::Verilog1995,
                Standard::Verilog2001,
                Standard::Verilog2005,
                Standard::SystemVerilog2005,
                Standard::SystemVerilog2009,
                Standard::SystemVerilog2012,
            ],
            Standard::SystemVerilog2017 => &[
                Standard::Verilog1995,
                Standard::Verilog2001,
                Standard::Verilog2005,
                Standard::SystemVerilog2005,
                Standard::SystemVerilog2009,
                Standard::SystemVerilog2012,
                Standard::SystemVerilog2017,
            ],
            Standard::VerilogAms => &[
                Standard::Verilog1995,
                Standard::Verilog2001,
                Standard::Verilog2005,
                Standard::VerilogAms,
            ],
        }
    }

    /// The symbols first introduced by this standard, keywords and
    /// backticked compiler directives alike.
    pub fn introduced_symbols(self) -> &'static [&'static str] {
        keywords::introduced_symbols(self)
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standard {
    type Err = BadStandard;

    /// Parses a canonical name or one of the historically accepted
    /// aliases (`1995`, `2001`, `1364-2001-noconfig`, `sv31`, `latest`,
    /// and anything matching `V?AMS`).
    fn from_str(name: &str) -> Result<Standard, BadStandard> {
        let res = match name {
            "1364-1995" | "1995" => Standard::Verilog1995,
            "1364-2001" | "2001" | "1364-2001-noconfig" => Standard::Verilog2001,
            "1364-2005" => Standard::Verilog2005,
            "1800-2005" | "sv31" => Standard::SystemVerilog2005,
            "1800-2009" => Standard::SystemVerilog2009,
            "1800-2012" => Standard::SystemVerilog2012,
            "1800-2017" | "latest" => Standard::SystemVerilog2017,
            _ => {
                let upper = name.to_ascii_uppercase();
                if upper.strip_prefix('V').unwrap_or(&upper).starts_with("AMS") {
                    Standard::VerilogAms
                } else {
                    return Err(BadStandard(name.into()));
                }
            }
        };
        Ok(res)
    }
}

/// The flattened symbol view for one [`Standard`].
///
/// Owns an insertion-ordered map from symbol to the earliest standard in
/// this standard's basis that defines it.  Construction walks the basis
/// oldest first, so a symbol present in several revisions reports the one
/// that introduced it.
pub struct Language {
    standard: Standard,
    keywords: IndexMap<&'static str, Standard>,
}

impl Language {
    /// Builds the flattened keyword view for `standard`.
    pub fn new(standard: Standard) -> Language {
        let mut keywords = IndexMap::new();
        for &basis in standard.basis() {
            for &sym in basis.introduced_symbols() {
                keywords.entry(sym).or_insert(basis);
            }
        }
        Language { standard, keywords }
    }

    /// The standard this view was built for.
    pub fn standard(&self) -> Standard {
        self.standard
    }

    /// Classifies `sym` as a keyword of this language, returning the
    /// standard that introduced it.  Backticked directives are keywords
    /// too.
    pub fn is_keyword(&self, sym: &str) -> Option<Standard> {
        self.keywords.get(sym).copied()
    }

    /// Classifies `sym` as a compiler directive (with its backtick).
    /// Consults the directive table directly; the result does not depend
    /// on the standard this view was built for.
    pub fn is_compdirect(&self, sym: &str) -> Option<Standard> {
        keywords::COMPDIRECTS.get(sym).copied()
    }

    /// Classifies `sym` as a gate primitive.  Like [`Language::is_compdirect`],
    /// independent of the standard.
    pub fn is_gateprim(&self, sym: &str) -> Option<Standard> {
        keywords::GATE_PRIMS.get(sym).copied()
    }

    /// The full symbol → introducing-standard map, in table order.
    pub fn keywords(&self) -> &IndexMap<&'static str, Standard> {
        &self.keywords
    }
}

/// The process-wide active language.  Classification reads clone the Arc
/// under the read lock; [`set_language_standard`] swaps in a freshly built
/// [`Language`] under the write lock, so readers always observe a complete
/// flattened set.  Concurrent writers must be serialized by the caller.
static ACTIVE: Lazy<RwLock<Arc<Language>>> =
    Lazy::new(|| RwLock::new(Arc::new(Language::new(Standard::latest()))));

/// Returns the active standard without changing it.
pub fn language_standard() -> Standard {
    ACTIVE.read().standard()
}

/// Validates `name`, makes it the active standard, and returns the
/// normalized standard.  On [`BadStandard`] the active standard is left
/// unchanged.
pub fn set_language_standard(name: &str) -> Result<Standard, BadStandard> {
    let standard: Standard = name.parse()?;
    let mut active = ACTIVE.write();
    if active.standard() != standard {
        tracing::debug!(from = %active.standard(), to = %standard, "language standard changed");
        *active = Arc::new(Language::new(standard));
    }
    Ok(standard)
}

/// Returns the greatest supported standard, `1800-2017`.
pub fn language_maximum() -> Standard {
    Standard::latest()
}

/// Returns the flattened keyword view for `standard`, or for the active
/// standard when `None`.
pub fn language_keywords(standard: Option<Standard>) -> Arc<Language> {
    let active = ACTIVE.read().clone();
    match standard {
        Some(standard) if standard != active.standard() => Arc::new(Language::new(standard)),
        _ => active,
    }
}

/// [`Language::is_keyword`] against the active standard.
pub fn is_keyword(sym: &str) -> Option<Standard> {
    ACTIVE.read().is_keyword(sym)
}

/// [`Language::is_compdirect`]; needs no lock since the directive table is
/// standard-independent.
pub fn is_compdirect(sym: &str) -> Option<Standard> {
    keywords::COMPDIRECTS.get(sym).copied()
}

/// [`Language::is_gateprim`]; likewise standard-independent.
pub fn is_gateprim(sym: &str) -> Option<Standard> {
    keywords::GATE_PRIMS.get(sym).copied()
}

#[cfg(test)]
mod tests;
