//! Rule and property names used by evaluation

/// General project configuration rule
pub const CONFIGURATION_GENERAL: &str = "ConfigurationGeneral";

/// Candidate frameworks for `.NETCoreApp` projects
pub const SUPPORTED_NETCOREAPP_TARGET_FRAMEWORK: &str = "SupportedNETCoreAppTargetFramework";

/// Candidate frameworks for `.NETFramework` projects
pub const SUPPORTED_NETFRAMEWORK_TARGET_FRAMEWORK: &str = "SupportedNETFrameworkTargetFramework";

/// Candidate frameworks for `.NETStandard` projects
pub const SUPPORTED_NETSTANDARD_TARGET_FRAMEWORK: &str = "SupportedNETStandardTargetFramework";

/// Framework family of the active configuration (`ConfigurationGeneral`)
pub const TARGET_FRAMEWORK_IDENTIFIER: &str = "TargetFrameworkIdentifier";

/// Short framework name, e.g. `net8.0` (`ConfigurationGeneral`)
pub const TARGET_FRAMEWORK: &str = "TargetFramework";

/// Full framework moniker, e.g. `.NETCoreApp,Version=v8.0` (`ConfigurationGeneral`)
pub const TARGET_FRAMEWORK_MONIKER: &str = "TargetFrameworkMoniker";

/// Item metadata holding the label of a supported framework
pub const DISPLAY_NAME: &str = "DisplayName";

/// Capability a project must have for target framework values to apply
pub const DOTNET_CAPABILITY: &str = "DotNet";
