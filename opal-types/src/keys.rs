//! The well-known key namespace.
//!
//! The application owns a fixed, enumerated set of keys; the store treats
//! them opaquely. Action modules write these keys, UI layers subscribe to
//! them. Keeping them in one place is what guarantees the "no two logical
//! state slots collide" invariant.

/// The current user session (auth tokens, account id, email).
pub const SESSION: &str = "session";

/// Set to true when a newer app version is available for download.
pub const UPDATE_AVAILABLE: &str = "updateAvailable";

/// Set to true when the running version is too old to talk to the server.
pub const UPDATE_REQUIRED: &str = "updateRequired";

/// Whether the current user is in the beta program.
pub const IS_BETA: &str = "isBeta";

/// Whether mobile multi-selection mode is active.
pub const MOBILE_SELECTION_MODE: &str = "mobileSelectionMode";

/// The user's last reported geographic location.
pub const USER_LOCATION: &str = "userLocation";

/// Whether a video or attachment is being viewed fullscreen.
pub const FULLSCREEN_VISIBILITY: &str = "fullscreenVisibility";

/// Search phrase persisted across the room-members screens.
pub const ROOM_MEMBERS_USER_SEARCH_PHRASE: &str = "roomMembersUserSearchPhrase";

/// Network reachability state (offline flag, status, time skew).
pub const NETWORK: &str = "network";

/// Shared file and chosen receiver for the share-file flow.
pub const SHARE_FILE: &str = "shareFile";

/// Properties of a natively shared file, kept for the share-extension flow.
pub const SHARE_TEMP_FILE: &str = "shareTempFile";

/// Details of a share recipient who has no account yet.
pub const SHARE_UNKNOWN_USER_DETAILS: &str = "shareUnknownUserDetails";

/// A previously validated file object kept for further use.
pub const VALIDATED_FILE_OBJECT: &str = "validatedFileObject";

/// Queue of write requests persisted for replay after reconnect.
pub const PERSISTED_REQUESTS: &str = "persistedRequests";
