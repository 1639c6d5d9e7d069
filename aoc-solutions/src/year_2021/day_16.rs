use anyhow::{anyhow, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::invalid_format;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 16, tags = ["y2021", "parsing", "bits"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Literal(u64),
    Operator(u8, Vec<Packet>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    version: u8,
    payload: Payload,
}

impl Packet {
    fn version_sum(&self) -> u64 {
        let nested = match &self.payload {
            Payload::Literal(_) => 0,
            Payload::Operator(_, subs) => subs.iter().map(Packet::version_sum).sum(),
        };
        self.version as u64 + nested
    }

    fn evaluate(&self) -> u64 {
        let (type_id, subs) = match &self.payload {
            Payload::Literal(v) => return *v,
            Payload::Operator(type_id, subs) => (*type_id, subs),
        };
        let mut values = subs.iter().map(Packet::evaluate);
        match type_id {
            0 => values.sum(),
            1 => values.product(),
            2 => values.min().unwrap_or(0),
            3 => values.max().unwrap_or(0),
            _ => {
                let (a, b) = (values.next().unwrap_or(0), values.next().unwrap_or(0));
                let holds = match type_id {
                    5 => a > b,
                    6 => a < b,
                    _ => a == b,
                };
                holds as u64
            }
        }
    }
}

/// Big-endian bit cursor over the decoded transmission
struct Bits {
    bits: Vec<bool>,
    pos: usize,
}

impl Bits {
    fn from_hex(hex: &str) -> anyhow::Result<Self> {
        let mut bits = Vec::with_capacity(hex.len() * 4);
        for c in hex.chars() {
            let nibble = c.to_digit(16).ok_or_else(|| anyhow!("not hex: {:?}", c))?;
            bits.extend((0..4).rev().map(|i| nibble >> i & 1 == 1));
        }
        Ok(Self { bits, pos: 0 })
    }

    fn read(&mut self, n: usize) -> anyhow::Result<u64> {
        ensure!(self.pos + n <= self.bits.len(), "transmission ended early");
        let value = self.bits[self.pos..self.pos + n]
            .iter()
            .fold(0, |acc, &b| acc << 1 | b as u64);
        self.pos += n;
        Ok(value)
    }

    fn packet(&mut self) -> anyhow::Result<Packet> {
        let version = self.read(3)? as u8;
        let type_id = self.read(3)? as u8;
        let payload = if type_id == 4 {
            let mut value = 0u64;
            loop {
                let more = self.read(1)? == 1;
                value = value << 4 | self.read(4)?;
                if !more {
                    break;
                }
            }
            Payload::Literal(value)
        } else {
            let mut subs = Vec::new();
            if self.read(1)? == 0 {
                let len = self.read(15)? as usize;
                let end = self.pos + len;
                while self.pos < end {
                    subs.push(self.packet()?);
                }
                if self.pos != end {
                    bail!("sub-packets overran their length");
                }
            } else {
                let count = self.read(11)?;
                for _ in 0..count {
                    subs.push(self.packet()?);
                }
            }
            Payload::Operator(type_id, subs)
        };
        Ok(Packet { version, payload })
    }
}

pub fn decode(hex: &str) -> anyhow::Result<Packet> {
    Bits::from_hex(hex.trim())?.packet()
}

impl AocParser for Solver {
    type SharedData<'a> = Packet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        decode(input).map_err(invalid_format)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.version_sum().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.evaluate().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve_example;

    #[test]
    fn literal_packet() {
        let packet = decode("D2FE28").unwrap();
        assert_eq!(packet.version, 6);
        assert_eq!(packet.payload, Payload::Literal(2021));
    }

    #[test]
    fn operator_packets() {
        let Payload::Operator(6, subs) = decode("38006F45291200").unwrap().payload else {
            panic!("expected a less-than operator");
        };
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].payload, Payload::Literal(10));
        assert_eq!(subs[1].payload, Payload::Literal(20));
    }

    #[test]
    fn version_sums() {
        assert_eq!(solve_example::<Solver>("8A004A801A8002F478", 1), "16");
        assert_eq!(solve_example::<Solver>("620080001611562C8802118E34", 1), "12");
        assert_eq!(solve_example::<Solver>("C0015000016115A2E0802F182340", 1), "23");
        assert_eq!(solve_example::<Solver>("A0016C880162017C3686B18A3D4780", 1), "31");
    }

    #[test]
    fn evaluation() {
        let cases = [
            ("C200B40A82", "3"),
            ("04005AC33890", "54"),
            ("880086C3E88112", "7"),
            ("CE00C43D881120", "9"),
            ("D8005AC2A8F0", "1"),
            ("F600BC2D8F", "0"),
            ("9C005AC2F8F0", "0"),
            ("9C0141080250320F1802104A08", "1"),
        ];
        for (hex, expected) in cases {
            assert_eq!(solve_example::<Solver>(hex, 2), expected, "{}", hex);
        }
    }

    #[test]
    fn truncated_transmission() {
        assert!(decode("D2").is_err());
    }
}
