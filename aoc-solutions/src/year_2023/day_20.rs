use std::collections::{HashMap, VecDeque};

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;
use crate::utils::numbers::lcm;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 20, tags = ["y2023", "simulation", "cycle"])]
pub struct Solver;

const BROADCASTER: &str = "broadcaster";
const FINAL_MACHINE: &str = "rx";
const MAX_PRESSES: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Broadcast,
    FlipFlop,
    Conjunction,
    /// Named only as an output, like `rx`
    Sink,
}

#[derive(Debug)]
pub struct Module<'a> {
    name: &'a str,
    kind: Kind,
    outputs: Vec<usize>,
}

#[derive(Debug)]
pub struct Network<'a> {
    modules: Vec<Module<'a>>,
    broadcaster: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_network(input).map_err(invalid_format)
    }
}

fn parse_network(input: &str) -> anyhow::Result<Network<'_>> {
    let mut declared = Vec::new();
    for line in input.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (module, outputs) = line
            .split_once(" -> ")
            .ok_or_else(|| anyhow!("bad module {:?}", line))?;
        let (kind, name) = if let Some(name) = module.strip_prefix('%') {
            (Kind::FlipFlop, name)
        } else if let Some(name) = module.strip_prefix('&') {
            (Kind::Conjunction, name)
        } else if module == BROADCASTER {
            (Kind::Broadcast, module)
        } else {
            return Err(anyhow!("unknown module type {:?}", module));
        };
        declared.push((name, kind, outputs.split(", ").collect::<Vec<_>>()));
    }

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut modules: Vec<Module<'_>> = Vec::new();
    for &(name, kind, _) in &declared {
        index.insert(name, modules.len());
        modules.push(Module { name, kind, outputs: Vec::new() });
    }
    for (i, (_, _, outputs)) in declared.iter().enumerate() {
        for &out in outputs {
            let target = *index.entry(out).or_insert_with(|| {
                modules.push(Module { name: out, kind: Kind::Sink, outputs: Vec::new() });
                modules.len() - 1
            });
            modules[i].outputs.push(target);
        }
    }
    let broadcaster = *index
        .get(BROADCASTER)
        .ok_or_else(|| anyhow!("no broadcaster"))?;
    Ok(Network { modules, broadcaster })
}

/// Flip-flop states and conjunction memories
struct Machine<'n, 'a> {
    network: &'n Network<'a>,
    on: Vec<bool>,
    memory: Vec<HashMap<usize, bool>>,
}

impl<'n, 'a> Machine<'n, 'a> {
    fn new(network: &'n Network<'a>) -> Self {
        let mut memory = vec![HashMap::new(); network.modules.len()];
        for (from, module) in network.modules.iter().enumerate() {
            for &to in &module.outputs {
                if network.modules[to].kind == Kind::Conjunction {
                    memory[to].insert(from, false);
                }
            }
        }
        Self {
            network,
            on: vec![false; network.modules.len()],
            memory,
        }
    }

    /// Push the button once, calling `watch(from, to, high)` for every pulse.
    /// Returns the low and high pulse counts.
    fn press<F>(&mut self, mut watch: F) -> [u64; 2]
    where
        F: FnMut(usize, usize, bool),
    {
        let mut counts = [0; 2];
        let start = self.network.broadcaster;
        let mut queue = VecDeque::from([(start, start, false)]);
        while let Some((from, to, high)) = queue.pop_front() {
            counts[usize::from(high)] += 1;
            watch(from, to, high);
            let module = &self.network.modules[to];
            let send = match module.kind {
                Kind::Broadcast => Some(high),
                Kind::FlipFlop if !high => {
                    self.on[to] = !self.on[to];
                    Some(self.on[to])
                }
                Kind::FlipFlop | Kind::Sink => None,
                Kind::Conjunction => {
                    let memory = &mut self.memory[to];
                    memory.insert(from, high);
                    Some(!memory.values().all(|&h| h))
                }
            };
            if let Some(pulse) = send {
                queue.extend(module.outputs.iter().map(|&out| (to, out, pulse)));
            }
        }
        counts
    }
}

pub fn pulse_product(network: &Network<'_>, presses: usize) -> u64 {
    let mut machine = Machine::new(network);
    let mut totals = [0; 2];
    for _ in 0..presses {
        let [low, high] = machine.press(|_, _, _| {});
        totals[0] += low;
        totals[1] += high;
    }
    totals[0] * totals[1]
}

/// Presses until `rx` first receives a low pulse.
///
/// `rx` is fed by one conjunction; each of its inputs goes high on its own
/// fixed period, so the answer is the LCM of those periods.
pub fn presses_until_low(network: &Network<'_>, target: &str) -> Result<u64, SolveError> {
    let modules = &network.modules;
    let rx = modules
        .iter()
        .position(|m| m.name == target)
        .ok_or_else(|| SolveError::failed(format!("no module named {}", target)))?;
    let feeders: Vec<usize> = (0..modules.len())
        .filter(|&i| modules[i].outputs.contains(&rx))
        .collect();
    let &[feeder] = feeders.as_slice() else {
        return Err(SolveError::failed(format!("{} needs exactly one input", target)));
    };
    if modules[feeder].kind != Kind::Conjunction {
        return Err(SolveError::failed("the final input is not a conjunction"));
    }
    let inputs: Vec<usize> = (0..modules.len())
        .filter(|&i| modules[i].outputs.contains(&feeder))
        .collect();

    let mut first_high: HashMap<usize, u64> = HashMap::new();
    let mut machine = Machine::new(network);
    for press in 1..=MAX_PRESSES {
        machine.press(|from, to, high| {
            if high && to == feeder && inputs.contains(&from) {
                first_high.entry(from).or_insert(press);
            }
        });
        if first_high.len() == inputs.len() {
            tracing::debug!(?first_high, "all conjunction inputs seen high");
            return Ok(first_high.values().fold(1, |acc, &p| lcm(acc, p)));
        }
    }
    Err(SolveError::failed(format!("no cycle found in {} presses", MAX_PRESSES)))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(pulse_product(shared, 1000).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(presses_until_low(shared, FINAL_MACHINE)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn single_press_counts() {
        let network = Solver::parse("broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a\n").unwrap();
        let mut machine = Machine::new(&network);
        assert_eq!(machine.press(|_, _, _| {}), [8, 4]);
    }

    #[test]
    fn examples() {
        let first = "broadcaster -> a, b, c\n%a -> b\n%b -> c\n%c -> inv\n&inv -> a\n";
        assert_eq!(solve_example::<Solver>(first, 1), "32000000");
        let second = "broadcaster -> a\n%a -> inv, con\n&inv -> b\n%b -> con\n&con -> output\n";
        assert_eq!(solve_example::<Solver>(second, 1), "11687500");
    }

    #[test]
    fn low_pulse_to_final_machine() {
        let network = Solver::parse("broadcaster -> a\n%a -> b\n%b -> con\n&con -> rx\n").unwrap();
        assert_eq!(presses_until_low(&network, FINAL_MACHINE).unwrap(), 2);
    }
}
