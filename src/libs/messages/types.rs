#[derive(Debug, Clone)]
pub enum Message {
    // === VACATION MESSAGES ===
    VacationAdded(String),
    VacationUpdated(String),
    VacationDeleted(String),
    VacationDeleteBlocked(String),
    VacationNotFound(i64),
    VacationListHeader,
    VacationsNotFound,
    ConfirmDeleteVacation(String),

    // === EXCURSION MESSAGES ===
    ExcursionAdded(String),
    ExcursionUpdated(String),
    ExcursionDeleted(String),
    ExcursionNotFound(i64),
    ExcursionOrphanRejected(i64),
    ExcursionOutsideVacation(String, String),
    ExcursionListHeader,
    ExcursionsNotFound,
    ConfirmDeleteExcursion(String),

    // === VALIDATION MESSAGES ===
    TitleEmpty,
    LodgingEmpty,
    DateOrderInvalid(String, String),
    DateMissing,

    // === SCAN MESSAGES ===
    ScanStarted(String),
    ScanSucceeded(String),
    ScanFailed(String),

    // === NOTIFICATION MESSAGES ===
    NotificationsEnabled,
    NotificationsDisabled,
    NotificationsStatus(bool),
    AlertPosted(String, String),
    AlertSuppressed(String),

    // === CONFIG MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    PromptNotificationsEnabled,
    PromptScanDelayHours,
    PromptScanWorkers,

    // === WATCH MESSAGES ===
    WatchStarted(u64),
    WatchNextRun(String),

    // === GENERIC MESSAGES ===
    OperationCancelled,
    RepositoryClosed,

    // === ERROR MESSAGES ===
    Error(String),
    DbErrorConnection(String),
    DbErrorQuery(String),
    ConfigParseError(String),
    ConfigSaveError(String),

    // === CUSTOM MESSAGE ===
    Custom(String),
}
