use esp_hal::rng::Rng;
use rand_core::{RngCore, impls};

/// Hardware random number generator
pub(crate) struct EspRandom {
    rng: Rng,
}

impl EspRandom {
    pub(crate) fn new() -> Self {
        Self { rng: Rng::new() }
    }
}

impl RngCore for EspRandom {
    fn next_u32(&mut self) -> u32 {
        self.rng.random()
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.rng.random()) << 32 | u64::from(self.rng.random())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
