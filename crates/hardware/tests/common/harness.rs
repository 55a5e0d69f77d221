use vref_core::{Config, Operation, VectorModel};

/// Installs a `tracing` subscriber honoring `RUST_LOG`; safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub struct TestContext {
    pub model: VectorModel,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// A model with the default 256-bit geometry.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// A model with `bits`-wide vector registers.
    pub fn with_vector_bits(bits: u32) -> Self {
        let mut config = Config::default();
        config.vector.vector_bits = bits;
        config.validate().expect("test geometry must be valid");
        Self::with_config(&config)
    }

    pub fn with_config(config: &Config) -> Self {
        init_tracing();
        Self {
            model: VectorModel::new(config),
        }
    }

    pub fn lanes(&self) -> usize {
        self.model.regs().lanes()
    }

    /// Writes `value` to every lane of `reg`.
    pub fn splat(mut self, reg: u8, value: u32) -> Self {
        self.model.regs_mut().splat(reg, value);
        self
    }

    /// Writes `lanes` to `reg`.
    pub fn with_reg(mut self, reg: u8, lanes: &[u32]) -> Self {
        self.model.regs_mut().write(reg, lanes);
        self
    }

    pub fn issue(&mut self, word: u32) -> Operation {
        self.model.issue(word, 0, 0)
    }

    /// Issues a word that carries a scalar operand.
    pub fn issue_scalar(&mut self, word: u32, data: u32) -> Operation {
        self.model.issue(word, 0, data)
    }

    pub fn reg(&self, reg: u8) -> &[u32] {
        self.model.regs().read(reg)
    }
}
