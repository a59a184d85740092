//! Static command catalog
//!
//! Maps every abstract command to its per-dialect HTTP method, URL template
//! and body parameters. The table is immutable, `'static`, and safe for
//! unsynchronized concurrent reads across sessions. Naming differences
//! between the dialects (e.g. switch-to-window `handle` vs legacy `name`)
//! are enumerated here, never inferred at translation time.
//!
//! A command may lack an endpoint in one dialect (`getElementRect` is
//! W3C-only, `isElementDisplayed` is legacy-only); the translator turns
//! that absence into `UnknownCommand` before any network call.

use super::types::HttpMethod;

/// One body parameter of an endpoint, with its wire-level name
#[derive(Debug, Clone, Copy)]
pub struct BodyParam {
    /// Abstract (caller-facing) parameter name
    pub name: &'static str,
    /// Name the parameter takes in this dialect's request body
    pub wire: &'static str,
    /// Whether translation fails without it
    pub required: bool,
}

impl BodyParam {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            wire: name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            wire: name,
            required: false,
        }
    }

    pub const fn renamed(name: &'static str, wire: &'static str) -> Self {
        Self {
            name,
            wire,
            required: true,
        }
    }
}

/// HTTP endpoint of a command in one dialect
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: HttpMethod,
    /// URL template; `{sessionId}` and other `{...}` segments are
    /// substituted from the session and the call parameters
    pub path: &'static str,
    pub body: &'static [BodyParam],
}

const fn get(path: &'static str) -> Endpoint {
    Endpoint {
        method: HttpMethod::Get,
        path,
        body: EMPTY,
    }
}

const fn post(path: &'static str, body: &'static [BodyParam]) -> Endpoint {
    Endpoint {
        method: HttpMethod::Post,
        path,
        body,
    }
}

const fn delete(path: &'static str) -> Endpoint {
    Endpoint {
        method: HttpMethod::Delete,
        path,
        body: EMPTY,
    }
}

/// Catalog entry: the two dialect renderings of one abstract command
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub legacy: Option<Endpoint>,
    pub w3c: Option<Endpoint>,
}

const fn both(endpoint: Endpoint) -> CommandSpec {
    CommandSpec {
        legacy: Some(endpoint),
        w3c: Some(endpoint),
    }
}

const fn split(legacy: Endpoint, w3c: Endpoint) -> CommandSpec {
    CommandSpec {
        legacy: Some(legacy),
        w3c: Some(w3c),
    }
}

const fn legacy_only(endpoint: Endpoint) -> CommandSpec {
    CommandSpec {
        legacy: Some(endpoint),
        w3c: None,
    }
}

const fn w3c_only(endpoint: Endpoint) -> CommandSpec {
    CommandSpec {
        legacy: None,
        w3c: Some(endpoint),
    }
}

const EMPTY: &[BodyParam] = &[];
const P_URL: &[BodyParam] = &[BodyParam::required("url")];
const P_SCRIPT: &[BodyParam] = &[BodyParam::required("script"), BodyParam::optional("args")];
const P_LOCATOR: &[BodyParam] = &[BodyParam::required("using"), BodyParam::required("value")];
const P_TEXT: &[BodyParam] = &[BodyParam::required("text")];
const P_COOKIE: &[BodyParam] = &[BodyParam::required("cookie")];
const P_FRAME_ID: &[BodyParam] = &[BodyParam::required("id")];
const P_WINDOW_LEGACY: &[BodyParam] = &[BodyParam::renamed("handle", "name")];
const P_WINDOW_W3C: &[BodyParam] = &[BodyParam::required("handle")];
const P_SIZE_LEGACY: &[BodyParam] = &[
    BodyParam::required("width"),
    BodyParam::required("height"),
];
const P_RECT_W3C: &[BodyParam] = &[
    BodyParam::optional("x"),
    BodyParam::optional("y"),
    BodyParam::optional("width"),
    BodyParam::optional("height"),
];
const P_TIMEOUTS_W3C: &[BodyParam] = &[
    BodyParam::optional("implicit"),
    BodyParam::optional("pageLoad"),
    BodyParam::optional("script"),
];

/// Abstract, dialect-neutral command identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    NewSession,
    DeleteSession,
    Status,
    NavigateTo,
    GetCurrentUrl,
    GetTitle,
    GoBack,
    GoForward,
    Refresh,
    GetPageSource,
    TakeScreenshot,
    ExecuteScript,
    ExecuteAsyncScript,
    FindElement,
    FindElements,
    FindElementFromElement,
    FindElementsFromElement,
    GetActiveElement,
    ElementClick,
    ElementClear,
    ElementSendKeys,
    GetElementText,
    GetElementTagName,
    GetElementAttribute,
    GetElementProperty,
    IsElementSelected,
    IsElementEnabled,
    IsElementDisplayed,
    GetElementRect,
    GetElementLocation,
    GetElementSize,
    GetWindowRect,
    SetWindowRect,
    MaximizeWindow,
    GetWindowHandle,
    GetWindowHandles,
    CloseWindow,
    SwitchToWindow,
    SwitchToFrame,
    SwitchToParentFrame,
    GetTimeouts,
    SetTimeouts,
    GetAlertText,
    SendAlertText,
    AcceptAlert,
    DismissAlert,
    GetAllCookies,
    GetNamedCookie,
    AddCookie,
    DeleteCookie,
    DeleteAllCookies,
}

impl Command {
    /// Every command in the catalog, for table-driven tests
    pub const ALL: &'static [Command] = &[
        Command::NewSession,
        Command::DeleteSession,
        Command::Status,
        Command::NavigateTo,
        Command::GetCurrentUrl,
        Command::GetTitle,
        Command::GoBack,
        Command::GoForward,
        Command::Refresh,
        Command::GetPageSource,
        Command::TakeScreenshot,
        Command::ExecuteScript,
        Command::ExecuteAsyncScript,
        Command::FindElement,
        Command::FindElements,
        Command::FindElementFromElement,
        Command::FindElementsFromElement,
        Command::GetActiveElement,
        Command::ElementClick,
        Command::ElementClear,
        Command::ElementSendKeys,
        Command::GetElementText,
        Command::GetElementTagName,
        Command::GetElementAttribute,
        Command::GetElementProperty,
        Command::IsElementSelected,
        Command::IsElementEnabled,
        Command::IsElementDisplayed,
        Command::GetElementRect,
        Command::GetElementLocation,
        Command::GetElementSize,
        Command::GetWindowRect,
        Command::SetWindowRect,
        Command::MaximizeWindow,
        Command::GetWindowHandle,
        Command::GetWindowHandles,
        Command::CloseWindow,
        Command::SwitchToWindow,
        Command::SwitchToFrame,
        Command::SwitchToParentFrame,
        Command::GetTimeouts,
        Command::SetTimeouts,
        Command::GetAlertText,
        Command::SendAlertText,
        Command::AcceptAlert,
        Command::DismissAlert,
        Command::GetAllCookies,
        Command::GetNamedCookie,
        Command::AddCookie,
        Command::DeleteCookie,
        Command::DeleteAllCookies,
    ];

    /// Stable name of the command, used in logs and error messages
    pub fn name(self) -> &'static str {
        match self {
            Command::NewSession => "newSession",
            Command::DeleteSession => "deleteSession",
            Command::Status => "status",
            Command::NavigateTo => "navigateTo",
            Command::GetCurrentUrl => "getCurrentUrl",
            Command::GetTitle => "getTitle",
            Command::GoBack => "goBack",
            Command::GoForward => "goForward",
            Command::Refresh => "refresh",
            Command::GetPageSource => "getPageSource",
            Command::TakeScreenshot => "takeScreenshot",
            Command::ExecuteScript => "executeScript",
            Command::ExecuteAsyncScript => "executeAsyncScript",
            Command::FindElement => "findElement",
            Command::FindElements => "findElements",
            Command::FindElementFromElement => "findElementFromElement",
            Command::FindElementsFromElement => "findElementsFromElement",
            Command::GetActiveElement => "getActiveElement",
            Command::ElementClick => "elementClick",
            Command::ElementClear => "elementClear",
            Command::ElementSendKeys => "elementSendKeys",
            Command::GetElementText => "getElementText",
            Command::GetElementTagName => "getElementTagName",
            Command::GetElementAttribute => "getElementAttribute",
            Command::GetElementProperty => "getElementProperty",
            Command::IsElementSelected => "isElementSelected",
            Command::IsElementEnabled => "isElementEnabled",
            Command::IsElementDisplayed => "isElementDisplayed",
            Command::GetElementRect => "getElementRect",
            Command::GetElementLocation => "getElementLocation",
            Command::GetElementSize => "getElementSize",
            Command::GetWindowRect => "getWindowRect",
            Command::SetWindowRect => "setWindowRect",
            Command::MaximizeWindow => "maximizeWindow",
            Command::GetWindowHandle => "getWindowHandle",
            Command::GetWindowHandles => "getWindowHandles",
            Command::CloseWindow => "closeWindow",
            Command::SwitchToWindow => "switchToWindow",
            Command::SwitchToFrame => "switchToFrame",
            Command::SwitchToParentFrame => "switchToParentFrame",
            Command::GetTimeouts => "getTimeouts",
            Command::SetTimeouts => "setTimeouts",
            Command::GetAlertText => "getAlertText",
            Command::SendAlertText => "sendAlertText",
            Command::AcceptAlert => "acceptAlert",
            Command::DismissAlert => "dismissAlert",
            Command::GetAllCookies => "getAllCookies",
            Command::GetNamedCookie => "getNamedCookie",
            Command::AddCookie => "addCookie",
            Command::DeleteCookie => "deleteCookie",
            Command::DeleteAllCookies => "deleteAllCookies",
        }
    }

    /// Catalog entry for this command. Total: every command has exactly one
    /// entry, loaded once at compile time.
    pub fn spec(self) -> CommandSpec {
        match self {
            Command::NewSession => both(post("/session", EMPTY)),
            Command::DeleteSession => both(delete("/session/{sessionId}")),
            Command::Status => both(get("/status")),

            Command::NavigateTo => both(post("/session/{sessionId}/url", P_URL)),
            Command::GetCurrentUrl => both(get("/session/{sessionId}/url")),
            Command::GetTitle => both(get("/session/{sessionId}/title")),
            Command::GoBack => both(post("/session/{sessionId}/back", EMPTY)),
            Command::GoForward => both(post("/session/{sessionId}/forward", EMPTY)),
            Command::Refresh => both(post("/session/{sessionId}/refresh", EMPTY)),
            Command::GetPageSource => both(get("/session/{sessionId}/source")),
            Command::TakeScreenshot => both(get("/session/{sessionId}/screenshot")),

            Command::ExecuteScript => split(
                post("/session/{sessionId}/execute", P_SCRIPT),
                post("/session/{sessionId}/execute/sync", P_SCRIPT),
            ),
            Command::ExecuteAsyncScript => split(
                post("/session/{sessionId}/execute_async", P_SCRIPT),
                post("/session/{sessionId}/execute/async", P_SCRIPT),
            ),

            Command::FindElement => both(post("/session/{sessionId}/element", P_LOCATOR)),
            Command::FindElements => both(post("/session/{sessionId}/elements", P_LOCATOR)),
            Command::FindElementFromElement => both(post(
                "/session/{sessionId}/element/{elementId}/element",
                P_LOCATOR,
            )),
            Command::FindElementsFromElement => both(post(
                "/session/{sessionId}/element/{elementId}/elements",
                P_LOCATOR,
            )),
            Command::GetActiveElement => split(
                post("/session/{sessionId}/element/active", EMPTY),
                get("/session/{sessionId}/element/active"),
            ),

            Command::ElementClick => {
                both(post("/session/{sessionId}/element/{elementId}/click", EMPTY))
            }
            Command::ElementClear => {
                both(post("/session/{sessionId}/element/{elementId}/clear", EMPTY))
            }
            // body shapes differ beyond renaming; the translator rewrites them
            Command::ElementSendKeys => {
                both(post("/session/{sessionId}/element/{elementId}/value", P_TEXT))
            }

            Command::GetElementText => both(get("/session/{sessionId}/element/{elementId}/text")),
            Command::GetElementTagName => {
                both(get("/session/{sessionId}/element/{elementId}/name"))
            }
            Command::GetElementAttribute => both(get(
                "/session/{sessionId}/element/{elementId}/attribute/{name}",
            )),
            Command::GetElementProperty => w3c_only(get(
                "/session/{sessionId}/element/{elementId}/property/{name}",
            )),
            Command::IsElementSelected => {
                both(get("/session/{sessionId}/element/{elementId}/selected"))
            }
            Command::IsElementEnabled => {
                both(get("/session/{sessionId}/element/{elementId}/enabled"))
            }
            Command::IsElementDisplayed => {
                legacy_only(get("/session/{sessionId}/element/{elementId}/displayed"))
            }
            Command::GetElementRect => {
                w3c_only(get("/session/{sessionId}/element/{elementId}/rect"))
            }
            Command::GetElementLocation => {
                legacy_only(get("/session/{sessionId}/element/{elementId}/location"))
            }
            Command::GetElementSize => {
                legacy_only(get("/session/{sessionId}/element/{elementId}/size"))
            }

            Command::GetWindowRect => split(
                get("/session/{sessionId}/window/current/size"),
                get("/session/{sessionId}/window/rect"),
            ),
            Command::SetWindowRect => split(
                post("/session/{sessionId}/window/current/size", P_SIZE_LEGACY),
                post("/session/{sessionId}/window/rect", P_RECT_W3C),
            ),
            Command::MaximizeWindow => split(
                post("/session/{sessionId}/window/current/maximize", EMPTY),
                post("/session/{sessionId}/window/maximize", EMPTY),
            ),
            Command::GetWindowHandle => split(
                get("/session/{sessionId}/window_handle"),
                get("/session/{sessionId}/window"),
            ),
            Command::GetWindowHandles => split(
                get("/session/{sessionId}/window_handles"),
                get("/session/{sessionId}/window/handles"),
            ),
            Command::CloseWindow => both(delete("/session/{sessionId}/window")),
            Command::SwitchToWindow => split(
                post("/session/{sessionId}/window", P_WINDOW_LEGACY),
                post("/session/{sessionId}/window", P_WINDOW_W3C),
            ),
            Command::SwitchToFrame => both(post("/session/{sessionId}/frame", P_FRAME_ID)),
            Command::SwitchToParentFrame => {
                both(post("/session/{sessionId}/frame/parent", EMPTY))
            }

            Command::GetTimeouts => w3c_only(get("/session/{sessionId}/timeouts")),
            // legacy takes {"type": ..., "ms": ...}; the translator rewrites it
            Command::SetTimeouts => split(
                post("/session/{sessionId}/timeouts", EMPTY),
                post("/session/{sessionId}/timeouts", P_TIMEOUTS_W3C),
            ),

            Command::GetAlertText => split(
                get("/session/{sessionId}/alert_text"),
                get("/session/{sessionId}/alert/text"),
            ),
            Command::SendAlertText => split(
                post("/session/{sessionId}/alert_text", P_TEXT),
                post("/session/{sessionId}/alert/text", P_TEXT),
            ),
            Command::AcceptAlert => split(
                post("/session/{sessionId}/accept_alert", EMPTY),
                post("/session/{sessionId}/alert/accept", EMPTY),
            ),
            Command::DismissAlert => split(
                post("/session/{sessionId}/dismiss_alert", EMPTY),
                post("/session/{sessionId}/alert/dismiss", EMPTY),
            ),

            Command::GetAllCookies => both(get("/session/{sessionId}/cookie")),
            Command::GetNamedCookie => w3c_only(get("/session/{sessionId}/cookie/{name}")),
            Command::AddCookie => both(post("/session/{sessionId}/cookie", P_COOKIE)),
            Command::DeleteCookie => both(delete("/session/{sessionId}/cookie/{name}")),
            Command::DeleteAllCookies => both(delete("/session/{sessionId}/cookie")),
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
