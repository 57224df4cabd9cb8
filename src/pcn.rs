//! PCN (positional cube notation) file codec
//!
//! Wire format, line-oriented ASCII:
//!
//! ```text
//! <numVars>
//! <numCubes>
//! <k1> <l1,1> <l1,2> ... <l1,k1>
//! <k2> <l2,1> ...
//! ...
//! ```
//!
//! Every non-empty field is a decimal integer; each cube line begins with
//! its own literal count, which must equal the number of literals that
//! follow. Any deviation fails with a single [`PcnError::BadPcnFile`]
//! naming the offending path.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::PcnError;

/// A signed, nonzero variable reference: `+k` is `x_k`, `-k` is `¬x_k`.
pub type Literal = i32;

/// An unordered set of literals denoting their conjunction.
///
/// Internally literals are kept sorted by absolute value ascending, which
/// both matches the codec's serialization contract and makes structural
/// `Vec` equality coincide with set equality, since a well-formed cube
/// never has a variable appear twice. The empty cube is the canonical
/// don't-care cube and denotes `true`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cube(Vec<Literal>);

impl Cube {
    /// Builds a cube from literals in any order, sorting by absolute
    /// value and deduplicating exact repeats.
    ///
    /// Panics if a variable appears with both polarities (such a cube
    /// denotes false and is never materialized, no cube list should ever
    /// be asked to construct one).
    pub fn new(mut literals: Vec<Literal>) -> Self {
        literals.sort_by_key(|l| l.unsigned_abs());
        literals.dedup();
        for w in literals.windows(2) {
            assert!(
                w[0].unsigned_abs() != w[1].unsigned_abs(),
                "cube contains opposite literals for the same variable: {} and {}",
                w[0],
                w[1]
            );
        }
        Cube(literals)
    }

    /// The don't-care cube (denotes `true`).
    pub fn dont_care() -> Self {
        Cube(Vec::new())
    }

    pub fn is_dont_care(&self) -> bool {
        self.0.is_empty()
    }

    pub fn literals(&self) -> &[Literal] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.0.contains(&literal)
    }

    /// Whether variable `|literal|` appears in this cube, in either
    /// polarity.
    pub fn mentions(&self, var: usize) -> bool {
        self.0.iter().any(|l| l.unsigned_abs() as usize == var)
    }
}

impl FromIterator<Literal> for Cube {
    fn from_iter<T: IntoIterator<Item = Literal>>(iter: T) -> Self {
        Cube::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Cube {
    type Item = &'a Literal;
    type IntoIter = std::slice::Iter<'a, Literal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A disjunction of cubes (sum of products). The empty list denotes
/// `false`; a list containing the empty cube denotes `true`.
pub type CubeList = Vec<Cube>;

/// Deduplicates a cube list, preserving set semantics without imposing
/// an ordering requirement on callers.
pub fn dedup_cubes(cubes: CubeList) -> CubeList {
    let mut seen = std::collections::HashSet::with_capacity(cubes.len());
    let mut out = Vec::with_capacity(cubes.len());
    for cube in cubes {
        if seen.insert(cube.clone()) {
            out.push(cube);
        }
    }
    out
}

/// A parsed PCN value: a variable-count bound paired with its cube list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcnValue {
    pub num_vars: usize,
    pub cubes: CubeList,
}

impl PcnValue {
    pub fn new(num_vars: usize, cubes: CubeList) -> Self {
        PcnValue {
            num_vars,
            cubes: dedup_cubes(cubes),
        }
    }

    /// Builds a value inferring `num_vars` from the maximum literal
    /// magnitude appearing in `cubes` (0 if `cubes` is empty).
    pub fn from_cubes_inferred(cubes: CubeList) -> Self {
        let num_vars = find_num_vars(&cubes);
        PcnValue::new(num_vars, cubes)
    }
}

/// The number of variables implied by a cube list: the maximum literal
/// magnitude appearing anywhere in it, or 0 if the list is empty.
pub fn find_num_vars(cubes: &CubeList) -> usize {
    cubes
        .iter()
        .flat_map(|c| c.literals())
        .map(|l| l.unsigned_abs() as usize)
        .max()
        .unwrap_or(0)
}

/// Parses a `.pcn` file into a [`PcnValue`].
pub fn parse(path: impl AsRef<Path>) -> Result<PcnValue, PcnError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    parse_reader(BufReader::new(file), path)
}

fn bad(path: &Path, reason: impl Into<String>) -> PcnError {
    PcnError::BadPcnFile {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

fn parse_reader(reader: impl BufRead, path: &Path) -> Result<PcnValue, PcnError> {
    let mut lines = reader.lines();

    let num_vars_line = lines
        .next()
        .ok_or_else(|| bad(path, "missing variable-count line"))??;
    let num_vars: usize = num_vars_line
        .trim()
        .parse()
        .map_err(|_| bad(path, format!("invalid variable count '{num_vars_line}'")))?;

    let num_cubes_line = lines
        .next()
        .ok_or_else(|| bad(path, "missing cube-count line"))??;
    let num_cubes: usize = num_cubes_line
        .trim()
        .parse()
        .map_err(|_| bad(path, format!("invalid cube count '{num_cubes_line}'")))?;

    let mut cubes = Vec::with_capacity(num_cubes);
    for i in 0..num_cubes {
        let line = lines
            .next()
            .ok_or_else(|| bad(path, format!("missing cube line {}", i + 1)))??;
        let mut fields = line.split_whitespace();
        let declared: usize = fields
            .next()
            .ok_or_else(|| bad(path, format!("cube line {} is empty", i + 1)))?
            .parse()
            .map_err(|_| bad(path, format!("cube line {} has a non-integer count", i + 1)))?;

        let literals: Vec<Literal> = fields
            .map(|f| f.parse::<Literal>())
            .collect::<Result<_, _>>()
            .map_err(|_| bad(path, format!("cube line {} has a non-integer literal", i + 1)))?;

        if literals.len() != declared {
            return Err(bad(
                path,
                format!(
                    "cube line {} declares {declared} literal(s) but has {}",
                    i + 1,
                    literals.len()
                ),
            ));
        }
        for &l in &literals {
            if l == 0 || l.unsigned_abs() as usize > num_vars {
                return Err(bad(
                    path,
                    format!("cube line {} has out-of-range literal {l}", i + 1),
                ));
            }
        }

        cubes.push(Cube::new(literals));
    }

    Ok(PcnValue::new(num_vars, cubes))
}

/// Serializes `cubes` to `path` in PCN format.
///
/// Literals within each cube are sorted by absolute value ascending and
/// cubes are deduplicated before writing, per the codec's set-semantics
/// contract.
pub fn write(path: impl AsRef<Path>, cubes: &CubeList, num_vars: usize) -> Result<(), PcnError> {
    let file = File::create(path.as_ref())?;
    let mut writer = BufWriter::new(file);
    write_to(&mut writer, cubes, num_vars)?;
    writer.flush()?;
    Ok(())
}

/// Writes PCN text to any [`Write`] implementation.
pub fn write_to(writer: &mut impl Write, cubes: &CubeList, num_vars: usize) -> io::Result<()> {
    let deduped = dedup_cubes(cubes.clone());
    writeln!(writer, "{num_vars}")?;
    writeln!(writer, "{}", deduped.len())?;
    for cube in &deduped {
        write!(writer, "{}", cube.len())?;
        for l in cube.literals() {
            write!(writer, " {l}")?;
        }
        writeln!(writer)?;
    }
    Ok(())
}

/// Renders `cubes` as PCN text without touching the filesystem.
pub fn to_string(cubes: &CubeList, num_vars: usize) -> String {
    let mut buf = Vec::new();
    write_to(&mut buf, cubes, num_vars).expect("writing to an in-memory buffer cannot fail");
    String::from_utf8(buf).expect("PCN output is ASCII")
}
