/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation in `display.rs`; call sites
/// pass variants to the `msg_*` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === INSTALL MESSAGES ===
    Installed,
    Uninstalled,
    TableDropped(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigSaveError,
    ConfigHeader,
    ConfigWizardHeader,
    PromptShowPriority,
    PromptShowDuration,
    PromptWorkHoursPerDay,
    WorkHoursOutOfRange(u32),

    // === PROJECT AND TASK MESSAGES ===
    ProjectCreated(i64, String),
    ProjectNotFound(i64),
    ProjectsHeader,
    NoProjectsFound,
    TaskCreated(i64, String),

    // === CARD MESSAGES ===
    CardHeader(String, i64),
    CardNothingToShow(String, i64),
    InvalidPriorityColorOverride(String),
    NoDurationToShow,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
}
