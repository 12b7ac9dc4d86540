// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


mod configuration_artifact;
mod login_page;
mod platform_version;
mod pre_save_response;
mod singleton_check_result;
mod toggle_statement;

pub use configuration_artifact::*;
pub use login_page::*;
pub use platform_version::*;
pub use pre_save_response::*;
pub use singleton_check_result::*;
pub use toggle_statement::*;
