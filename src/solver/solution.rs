use std::fmt;

use crate::operator::Operator;

/// A single reduction: `left operator right`, written back at `position`
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub position: usize,
    pub left: f64,
    pub operator: Operator,
    pub right: f64,
    /// Buffer contents after this reduction
    pub buffer: Vec<f64>,
}

/// Derivation trace of an expression that reached the target
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub permutation: Vec<f64>,
    pub operators: Vec<Operator>,
    pub order: Vec<usize>,
    pub steps: Vec<Step>,
    pub value: f64,
}

impl Solution {
    /// A lone input that already equals the target
    pub fn trivial(value: f64) -> Self {
        Self {
            permutation: vec![value],
            operators: Vec::new(),
            order: Vec::new(),
            steps: Vec::new(),
            value,
        }
    }

    /// Fully parenthesised infix form, e.g. `((5 - (1 / 5)) * 5)`
    pub fn expression(&self) -> String {
        let mut terms: Vec<String> = self.permutation.iter().map(f64::to_string).collect();

        for step in &self.steps {
            if step.position + 1 >= terms.len() {
                break;
            }
            let right = terms.remove(step.position + 1);
            let left = &terms[step.position];
            terms[step.position] = format!("({} {} {})", left, step.operator, right);
        }

        terms.join(", ")
    }
}

fn write_values(f: &mut fmt::Formatter, values: &[f64]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_values(f, &self.permutation)?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{} {} {}: ", step.left, step.operator, step.right)?;
            write_values(f, &step.buffer)?;
            writeln!(f)?;
        }
        write!(f, "result: {}", self.value)
    }
}
