// Copyright (c) 2025 Sosanhgia Contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Domain layer module
///
/// Contains the core business logic of the system:
/// - domain models (models): the records the crawler emits
/// - normalization (normalize): canonical attributes from raw titles
/// - shops (shops): marketplace identity helpers
///
/// The domain layer does not depend on the browser or any external
/// implementation.
pub mod models;
pub mod normalize;
pub mod shops;
