/// Asset name downloaded when no artifact argument is given, kept
/// so historical invocations without arguments keep working.
pub const DEFAULT_ARTIFACT_NAME: &str = "servantV3-0.0.1-SNAPSHOT-fat.jar";
