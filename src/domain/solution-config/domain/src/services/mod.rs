// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


mod configuration_pre_save_handler;
mod configuration_store;
mod singleton_configuration_check;
mod solution_toggler;

pub use configuration_pre_save_handler::*;
pub use configuration_store::*;
pub use singleton_configuration_check::*;
pub use solution_toggler::*;
