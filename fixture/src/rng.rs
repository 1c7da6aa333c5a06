//! Seedable non-cryptographically secure rng based on xxhash.
//!
//! Fixture runs must be reproducible, so the generator takes an
//! explicit seed instead of reaching for host entropy.
use rand::RngCore;
use xxhash_rust::const_xxh3::const_custom_default_secret;
use xxhash_rust::xxh3::xxh3_64_with_secret;

const SECRET_SEED: u64 = u64::from_le_bytes(*b"xMATFIXx");
const SECRET: [u8; 192] = const_custom_default_secret(SECRET_SEED);

pub struct FixtureRng {
    state: u64,
}

impl FixtureRng {
    pub fn new(seed: u64) -> FixtureRng {
        FixtureRng {
            state: xxh3_64_with_secret(&seed.to_le_bytes(), &SECRET),
        }
    }

    fn step(&mut self) -> u64 {
        let next =
            xxh3_64_with_secret(&self.state.to_le_bytes(), &SECRET);

        // Break the (extremely rare) one-element cycle
        self.state = if next == self.state {
            next.rotate_right(32)
        } else {
            next
        };

        self.state
    }
}

impl RngCore for FixtureRng {
    fn next_u32(&mut self) -> u32 {
        // Take lower bits
        self.step() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        // Sourcing from u64s, so write at most 8 bytes at a time
        for chunk in dest.chunks_mut(8) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(
        &mut self,
        dest: &mut [u8],
    ) -> Result<(), rand::Error> {
        self.fill_bytes(dest);

        Ok(())
    }
}
