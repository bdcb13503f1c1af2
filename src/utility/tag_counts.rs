use std::{collections::HashMap, io::Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::pos_sample::PosSample;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct TagCounts {
    counts: HashMap<String, usize>,
}

impl TagCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sample: &PosSample) {
        for tag in sample.tags() {
            *self.counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }

    // 出現回数の降順，同数ならタグ名順
    pub fn sorted(&self) -> Vec<TagCount> {
        let mut counts: Vec<TagCount> = self
            .counts
            .iter()
            .map(|(tag, &count)| TagCount {
                tag: tag.clone(),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        counts
    }

    pub fn write_csv(&self, writer: impl Write) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for record in self.sorted() {
            writer
                .serialize(&record)
                .with_context(|| format!("Failed to write record: {:?}", &record))?;
        }
        writer.flush().context("Failed to flush tag counts")?;
        Ok(())
    }
}
