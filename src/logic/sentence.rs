//! Propositional formulas

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
};

use serde::{Deserialize, Serialize};

/// A named propositional atom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Truth assignment for a set of symbols
pub type Model = HashMap<Symbol, bool>;

/// A propositional formula.
///
/// Formulas are immutable trees; the builder helpers return new values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentence {
    Symbol(Symbol),
    Not(Box<Sentence>),
    And(Vec<Sentence>),
    Or(Vec<Sentence>),
    Implication(Box<Sentence>, Box<Sentence>),
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Symbol(symbol)
    }
}

impl From<&Symbol> for Sentence {
    fn from(symbol: &Symbol) -> Self {
        Sentence::Symbol(symbol.clone())
    }
}

impl Sentence {
    pub fn symbol(name: impl Into<String>) -> Self {
        Sentence::Symbol(Symbol::new(name))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(operand: impl Into<Sentence>) -> Self {
        Sentence::Not(Box::new(operand.into()))
    }

    pub fn and<I, S>(conjuncts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sentence>,
    {
        Sentence::And(conjuncts.into_iter().map(Into::into).collect())
    }

    pub fn or<I, S>(disjuncts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Sentence>,
    {
        Sentence::Or(disjuncts.into_iter().map(Into::into).collect())
    }

    pub fn implies(antecedent: impl Into<Sentence>, consequent: impl Into<Sentence>) -> Self {
        Sentence::Implication(Box::new(antecedent.into()), Box::new(consequent.into()))
    }

    pub fn iff(left: impl Into<Sentence>, right: impl Into<Sentence>) -> Self {
        Sentence::Biconditional(Box::new(left.into()), Box::new(right.into()))
    }

    /// Extend a conjunction with another conjunct.
    ///
    /// A sentence that is not a conjunction becomes the first conjunct of a
    /// new one.
    #[allow(clippy::should_implement_trait)]
    #[must_use = "add returns the extended sentence"]
    pub fn add(self, conjunct: impl Into<Sentence>) -> Self {
        match self {
            Sentence::And(mut conjuncts) => {
                conjuncts.push(conjunct.into());
                Sentence::And(conjuncts)
            }
            other => Sentence::And(vec![other, conjunct.into()]),
        }
    }

    /// Top-level conjuncts; a non-conjunction is its own single conjunct.
    pub fn conjuncts(&self) -> &[Sentence] {
        match self {
            Sentence::And(conjuncts) => conjuncts,
            other => std::slice::from_ref(other),
        }
    }

    /// Truth value under `model`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnassignedSymbol`] when the formula mentions a
    /// symbol the model does not assign.
    pub fn evaluate(&self, model: &Model) -> Result<bool, crate::Error> {
        Ok(match self {
            Sentence::Symbol(symbol) => {
                *model
                    .get(symbol)
                    .ok_or_else(|| crate::Error::UnassignedSymbol {
                        symbol: symbol.to_string(),
                    })?
            }
            Sentence::Not(operand) => !operand.evaluate(model)?,
            Sentence::And(conjuncts) => {
                let mut value = true;
                for conjunct in conjuncts {
                    value &= conjunct.evaluate(model)?;
                }
                value
            }
            Sentence::Or(disjuncts) => {
                let mut value = false;
                for disjunct in disjuncts {
                    value |= disjunct.evaluate(model)?;
                }
                value
            }
            Sentence::Implication(antecedent, consequent) => {
                !antecedent.evaluate(model)? || consequent.evaluate(model)?
            }
            Sentence::Biconditional(left, right) => {
                left.evaluate(model)? == right.evaluate(model)?
            }
        })
    }

    /// Every symbol mentioned anywhere in the formula.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, into: &mut BTreeSet<Symbol>) {
        match self {
            Sentence::Symbol(symbol) => {
                into.insert(symbol.clone());
            }
            Sentence::Not(operand) => operand.collect_symbols(into),
            Sentence::And(operands) | Sentence::Or(operands) => {
                for operand in operands {
                    operand.collect_symbols(into);
                }
            }
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                left.collect_symbols(into);
                right.collect_symbols(into);
            }
        }
    }

    fn is_compound(&self) -> bool {
        !matches!(self, Sentence::Symbol(_) | Sentence::Not(_))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compound() {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }

    fn fmt_joined(f: &mut fmt::Formatter<'_>, operands: &[Sentence], op: &str) -> fmt::Result {
        if let [single] = operands {
            return write!(f, "{single}");
        }
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                write!(f, " {op} ")?;
            }
            operand.fmt_operand(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Symbol(symbol) => write!(f, "{symbol}"),
            Sentence::Not(operand) => {
                write!(f, "¬")?;
                operand.fmt_operand(f)
            }
            Sentence::And(conjuncts) => Self::fmt_joined(f, conjuncts, "∧"),
            Sentence::Or(disjuncts) => Self::fmt_joined(f, disjuncts, "∨"),
            Sentence::Implication(left, right) => {
                left.fmt_operand(f)?;
                write!(f, " => ")?;
                right.fmt_operand(f)
            }
            Sentence::Biconditional(left, right) => {
                left.fmt_operand(f)?;
                write!(f, " <=> ")?;
                right.fmt_operand(f)
            }
        }
    }
}
