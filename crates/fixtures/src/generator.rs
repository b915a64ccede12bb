//! Fixture generation
//!
//! Drives the encoders over the fixed inputs and pairs each input with its
//! hex encoding. Bare varints go through the varint encoder directly; every
//! other value goes through [`Encoder`], and the public key through the
//! interface path.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::inputs::{block_id_values, pubkey_value, time_values, varint_values};
use crate::record::{Category, FixtureRecord, FixtureSet, TypedValue};
use canonwire_core::load_zone;
use canonwire_wire::{encode_varint, pubkey_registry, Encode, Encoder, Interface};
use chrono::Utc;
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Produces fixture records from a configured encoder
#[derive(Debug, Clone)]
pub struct FixtureGenerator {
    encoder: Encoder,
    config: GeneratorConfig,
    zone: Tz,
}

impl FixtureGenerator {
    /// Create a generator
    ///
    /// Fails if the configured reference zone cannot be loaded.
    pub fn new(encoder: Encoder, config: GeneratorConfig) -> Result<Self> {
        let zone = load_zone(&config.zone)?;
        Ok(FixtureGenerator {
            encoder,
            config,
            zone,
        })
    }

    /// Create a generator over the public key registry
    pub fn with_default_registry(config: GeneratorConfig) -> Result<Self> {
        let registry = Arc::new(pubkey_registry()?);
        Self::new(Encoder::new(registry), config)
    }

    /// The configuration in use
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The encoder in use
    pub fn encoder(&self) -> &Encoder {
        &self.encoder
    }

    /// Varint records
    pub fn varints(&self) -> Result<Vec<FixtureRecord>> {
        varint_values()
            .into_iter()
            .map(|v| -> Result<FixtureRecord> { Ok(FixtureRecord::new(&v, &encode_varint(v)?)?) })
            .collect()
    }

    /// Timestamp records: the fixed instant, then the current one
    pub fn times(&self) -> Result<Vec<FixtureRecord>> {
        let now = self.config.now.unwrap_or_else(Utc::now);
        let values = time_values(&self.zone, now)?;
        self.encode_all(&values)
    }

    /// Block id records
    pub fn block_ids(&self) -> Result<Vec<FixtureRecord>> {
        self.encode_all(&block_id_values())
    }

    /// The public key record, encoded as `prefix || key`
    pub fn pubkey(&self) -> Result<FixtureRecord> {
        let key = pubkey_value(&self.config.secret);
        let bytes = self.encoder.marshal_interface(&key)?;
        let value = TypedValue {
            type_name: self.encoder.type_name_of(&key)?.to_string(),
            value: key.concrete_json()?,
        };
        Ok(FixtureRecord::new(&value, &bytes)?)
    }

    /// Every category; the first failure aborts the run
    pub fn generate_all(&self) -> Result<FixtureSet> {
        info!(
            "Generating fixtures (zone {}, secret of {} bytes)",
            self.config.zone,
            self.config.secret.len()
        );
        let set = FixtureSet {
            varint: self.varints()?,
            time: self.times()?,
            block_id: self.block_ids()?,
            pubkey: self.pubkey()?,
        };
        for category in Category::ALL {
            debug!("{}: {} records", category, set.records(category).len());
        }
        info!("Generated {} fixture records", set.len());
        Ok(set)
    }

    fn encode_all<T: Encode + Serialize>(&self, values: &[T]) -> Result<Vec<FixtureRecord>> {
        values
            .iter()
            .map(|v| -> Result<FixtureRecord> {
                Ok(FixtureRecord::new(v, &self.encoder.marshal_bare(v)?)?)
            })
            .collect()
    }
}
