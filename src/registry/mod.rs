// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Container registry credentials in the Docker client config format.

pub mod dockerconfig;

pub use dockerconfig::{decode, encode, DockerConfigDocument, RegistryCredential};
