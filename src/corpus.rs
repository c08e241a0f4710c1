//! Text corpora for benchmark runs.
//!
//! A corpus is decoded once into characters so every matcher searches the
//! exact same slice.

use std::fs;
use std::path::Path;

use log::debug;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;

use crate::error::{PatmatchError, Result};

/// Opening of Inferno, canto I (public domain).
const SAMPLE_TEXT: &str = "\
LA DIVINA COMMEDIA
di Dante Alighieri

INFERNO

Canto I

Nel mezzo del cammin di nostra vita
mi ritrovai per una selva oscura,
ché la diritta via era smarrita.

Ahi quanto a dir qual era è cosa dura
esta selva selvaggia e aspra e forte
che nel pensier rinova la paura!

Tant' è amara che poco è più morte;
ma per trattar del ben ch'i' vi trovai,
dirò de l'altre cose ch'i' v'ho scorte.

Io non so ben ridir com' i' v'intrai,
tant' era pien di sonno a quel punto
che la verace via abbandonai.

Ma poi ch'i' fui al piè d'un colle giunto,
là dove terminava quella valle
che m'avea di paura il cor compunto,

guardai in alto e vidi le sue spalle
vestite già de' raggi del pianeta
che mena dritto altrui per ogne calle.

Allor fu la paura un poco queta,
che nel lago del cor m'era durata
la notte ch'i' passai con tanta pieta.

E come quei che con lena affannata,
uscito fuor del pelago a la riva,
si volge a l'acqua perigliosa e guata,

così l'animo mio, ch'ancor fuggiva,
si volse a retro a rimirar lo passo
che non lasciò già mai persona viva.
";

/// Alphabet and relative weights used by [`Corpus::synthetic`].
const SYNTHETIC_ALPHABET: &[(char, u32)] = &[
    (' ', 180),
    ('e', 118),
    ('a', 117),
    ('i', 113),
    ('o', 98),
    ('n', 69),
    ('l', 65),
    ('r', 64),
    ('t', 56),
    ('s', 50),
    ('c', 45),
    ('d', 37),
    ('p', 31),
    ('u', 30),
    ('m', 25),
    ('v', 21),
    ('g', 16),
    ('h', 15),
    ('f', 10),
    ('b', 9),
    ('q', 5),
    ('z', 5),
    ('k', 1),
    ('j', 1),
    ('x', 1),
    ('y', 1),
    ('w', 1),
];

/// An immutable text decoded into characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Corpus {
    name: String,
    chars: Vec<char>,
}

impl Corpus {
    /// Build a corpus from in-memory text.
    pub fn from_text<S: Into<String>>(name: S, text: &str) -> Self {
        Corpus {
            name: name.into(),
            chars: text.chars().collect(),
        }
    }

    /// Read a UTF-8 corpus from disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let corpus = Self::from_text(path.display().to_string(), &text);
        debug!(
            "Loaded corpus {} ({} characters)",
            corpus.name,
            corpus.len()
        );
        Ok(corpus)
    }

    /// The built-in sample text.
    pub fn sample() -> Self {
        Self::from_text("inferno-canto-i", SAMPLE_TEXT)
    }

    /// Generate `len` characters of pseudo-Italian noise, reproducible by `seed`.
    pub fn synthetic(len: usize, seed: u64) -> Result<Self> {
        let weights = SYNTHETIC_ALPHABET.iter().map(|&(_, w)| w);
        let dist = WeightedIndex::new(weights)
            .map_err(|e| PatmatchError::corpus(format!("invalid synthetic alphabet: {e}")))?;
        let mut rng = StdRng::seed_from_u64(seed);

        let chars = (0..len)
            .map(|_| SYNTHETIC_ALPHABET[dist.sample(&mut rng)].0)
            .collect();

        Ok(Corpus {
            name: format!("synthetic-{len}-{seed}"),
            chars,
        })
    }

    /// A copy with every character lowercased.
    pub fn to_lowercase(&self) -> Self {
        Corpus {
            name: self.name.clone(),
            chars: self
                .chars
                .iter()
                .map(|c| c.to_lowercase().next().unwrap_or(*c))
                .collect(),
        }
    }

    /// Human-readable corpus name (file path for file corpora).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The decoded text.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the corpus has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Fail with a corpus error when empty.
    pub fn ensure_not_empty(&self) -> Result<()> {
        if self.is_empty() {
            return Err(PatmatchError::corpus(format!(
                "corpus '{}' is empty",
                self.name
            )));
        }
        Ok(())
    }
}
