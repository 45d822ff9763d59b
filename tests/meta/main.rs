//! Repository layout and manifest checks

mod metadata;
