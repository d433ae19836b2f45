// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource quantities, rendered in the units the manifests use.

use k8s_openapi::apimachinery::pkg::api::resource::Quantity;

/// CPU amount in millicores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cpu(u32);

impl Cpu {
    pub const fn millis(millis: u32) -> Self {
        Cpu(millis)
    }

    pub fn quantity(&self) -> Quantity {
        Quantity(format!("{}m", self.0))
    }
}

/// Memory amount in mebibytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Memory(u64);

impl Memory {
    pub const fn mebibytes(mebibytes: u64) -> Self {
        Memory(mebibytes)
    }

    pub const fn gibibytes(gibibytes: u64) -> Self {
        Memory(gibibytes * 1024)
    }

    pub fn quantity(&self) -> Quantity {
        Quantity(format!("{}Mi", self.0))
    }
}
