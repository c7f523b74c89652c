use log::trace;

use crate::operator::Operator;
use crate::solver::solution::Step;
use crate::solver::strategy::GroupingStrategy;

/// Fold `buffer` down to one value in place.
///
/// Step `i` combines the adjacent pair at the position `order[i]` resolves to
/// under `strategy`, using `operators[i]`. Returns `None` for an empty buffer.
pub fn reduce(
    buffer: &mut Vec<f64>,
    operators: &[Operator],
    order: &[usize],
    strategy: GroupingStrategy,
) -> Option<f64> {
    for (step, (&operator, &nominal)) in operators.iter().zip(order).enumerate() {
        if buffer.len() < 2 {
            break;
        }
        let position = strategy.resolve_position(nominal, step, buffer.len());
        let result = operator.apply(buffer[position], buffer[position + 1]);
        buffer[position] = result;
        buffer.remove(position + 1);
    }

    buffer.first().copied()
}

/// Same fold as [`reduce`], recording every step.
pub fn evaluate(
    permutation: &[f64],
    operators: &[Operator],
    order: &[usize],
    strategy: GroupingStrategy,
) -> Option<(f64, Vec<Step>)> {
    let mut buffer = permutation.to_vec();
    let mut steps = Vec::with_capacity(operators.len());

    for (step, (&operator, &nominal)) in operators.iter().zip(order).enumerate() {
        if buffer.len() < 2 {
            break;
        }
        let position = strategy.resolve_position(nominal, step, buffer.len());
        let (left, right) = (buffer[position], buffer[position + 1]);
        buffer[position] = operator.apply(left, right);
        buffer.remove(position + 1);

        trace!("{} {} {} -> {:?}", left, operator, right, buffer);
        steps.push(Step {
            position,
            left,
            operator,
            right,
            buffer: buffer.clone(),
        });
    }

    buffer.first().map(|&value| (value, steps))
}
