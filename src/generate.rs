use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::cnf::clause::{Clause, Literal};
use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenOptions {
    pub atoms: usize,
    pub clauses: usize,
    pub width: usize,
    pub seed: u64,
    /// Draw a hidden assignment first and keep every clause true under it.
    pub planted: bool,
}

impl Default for GenOptions {
    fn default() -> Self {
        Self {
            atoms: 8,
            clauses: 24,
            width: 3,
            seed: 1,
            planted: false,
        }
    }
}

pub fn atom_name(idx: usize) -> String {
    format!("x{}", idx + 1)
}

/// Random k-CNF over atoms `x1..xn`, reproducible from the seed.
pub fn random_cnf(opts: &GenOptions) -> Result<Vec<Clause>> {
    if opts.atoms == 0 {
        return Err(Error::Config("atoms must be >= 1".into()));
    }
    if opts.width == 0 || opts.width > opts.atoms {
        return Err(Error::Config(format!(
            "width must be in 1..={}, got {}",
            opts.atoms, opts.width
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(opts.seed);
    let hidden = (0..opts.atoms)
        .map(|_| rng.random::<bool>())
        .collect::<Vec<_>>();

    let mut out = Vec::with_capacity(opts.clauses);
    for _ in 0..opts.clauses {
        let mut picked = Vec::<usize>::with_capacity(opts.width);
        while picked.len() < opts.width {
            let idx = rng.random_range(0..opts.atoms);
            if !picked.contains(&idx) {
                picked.push(idx);
            }
        }

        let mut signs = picked
            .iter()
            .map(|_| rng.random::<bool>())
            .collect::<Vec<_>>();
        if opts.planted {
            let satisfied = picked
                .iter()
                .zip(&signs)
                .any(|(&idx, &positive)| hidden[idx] == positive);
            if !satisfied {
                // flip one literal so the hidden assignment satisfies it
                let pos = rng.random_range(0..picked.len());
                signs[pos] = hidden[picked[pos]];
            }
        }

        let clause = picked
            .iter()
            .zip(signs)
            .map(|(&idx, positive)| {
                if positive {
                    Literal::positive(atom_name(idx))
                } else {
                    Literal::negative(atom_name(idx))
                }
            })
            .collect::<Clause>();
        out.push(clause);
    }
    Ok(out)
}
