use serde::{Deserialize, Serialize};
use std::fmt;

/// Biological position within a padded sequence; index 0 is the pad.
pub type SeqPos = usize;

/// Pad byte at index 0 of forward-oriented sequences.
///
/// Never compared against query bytes by the graph rules.
const FORWARD_PAD: u8 = b'X';

/// Pad byte at index 0 of a complemented reference.
///
/// The reverse diagonal can reach index 0, so this byte must never equal a
/// nucleotide (or the forward pad).
const COMPLEMENT_PAD: u8 = b'Y';

/// Complement a nucleotide. Uppercase A/T/C/G map to their partner; every
/// other byte (ambiguity codes, lowercase) passes through unchanged.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'C' => b'G',
        b'G' => b'C',
        other => other,
    }
}

/// An immutable symbol sequence with a pad byte at index 0, so bases occupy
/// 1-indexed positions `1..len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    data: Vec<u8>,
}

impl Sequence {
    /// Build a padded sequence from raw bases.
    pub fn from_bases(bases: &[u8]) -> Self {
        Self::padded(bases.iter().copied(), FORWARD_PAD)
    }

    fn padded(bases: impl Iterator<Item = u8>, pad: u8) -> Self {
        let mut data = vec![pad];
        data.extend(bases);
        Self { data }
    }

    /// Total length, pad included.
    pub fn len(&self) -> SeqPos {
        self.data.len()
    }

    /// Position of the last base; 0 when only the pad is present.
    pub fn last_index(&self) -> SeqPos {
        self.data.len() - 1
    }

    /// True when the sequence holds no bases beyond the pad.
    pub fn is_empty(&self) -> bool {
        self.data.len() == 1
    }

    /// Byte at `index`; index 0 is the pad.
    pub fn base(&self, index: SeqPos) -> u8 {
        self.data[index]
    }

    /// The bases without the pad.
    pub fn bases(&self) -> &[u8] {
        &self.data[1..]
    }
}

/// A reference sequence together with its element-wise complement.
///
/// The complement keeps the forward left-to-right order; the reverse
/// orientation comes from the graph walking it right-to-left, not from
/// reversing the buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    forward: Sequence,
    complement: Sequence,
}

impl Reference {
    pub fn from_bases(bases: &[u8]) -> Self {
        let forward = Sequence::padded(bases.iter().copied(), FORWARD_PAD);
        let complement = Sequence::padded(bases.iter().map(|&b| complement(b)), COMPLEMENT_PAD);
        Self { forward, complement }
    }

    pub fn forward(&self) -> &Sequence {
        &self.forward
    }

    pub fn complement(&self) -> &Sequence {
        &self.complement
    }

    /// Padded length, identical for both orientations.
    pub fn len(&self) -> SeqPos {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// Which way the reference was read to produce a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strand {
    Forward,
    Reverse,
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

/// One aligned interval recovered by the backtrace: query range
/// `[query_start, query_end]` matched to reference range
/// `[ref_start, ref_end]` on `strand`.
///
/// Coordinates are signed: the reverse-orientation record offsets its
/// reference bounds by -1, which can touch -1 at the left edge of the
/// reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub query_start: i64,
    pub query_end: i64,
    pub ref_start: i64,
    pub ref_end: i64,
    pub strand: Strand,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{},{})",
            self.query_start, self.query_end, self.ref_start, self.ref_end
        )
    }
}
