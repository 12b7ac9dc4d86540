// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.


use uuid::Uuid;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Login page injected into the platform when the solution is enabled.
/// `{0}` is the application GUID, `{1}` the lower-case allow-access flag.
pub const LOGIN_PAGE_TEMPLATE: &str = r#"<script type="text/javascript">
    (function () {
        var settings = { applicationGuid: "{0}", allowAccessOnError: {1} };
        window.disclaimerAcceptance = window.disclaimerAcceptance || {};
        window.disclaimerAcceptance.settings = settings;
    })();
</script>"#;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Plain replacement: the template is full of braces that a format string
// would choke on
pub fn render_login_page(application_guid: &Uuid, allow_access_on_error: bool) -> String {
    LOGIN_PAGE_TEMPLATE
        .replace("{0}", &application_guid.to_string())
        .replace("{1}", if allow_access_on_error { "true" } else { "false" })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
