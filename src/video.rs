/// Timed clip concatenation against an audio track.
pub(crate) mod assemble;
