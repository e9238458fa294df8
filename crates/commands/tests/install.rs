//! Process-wide installation. Kept in its own binary: installation is
//! write-once for the lifetime of the process.

use simctl_protocol::{commands, results, RegistryError};

#[test]
fn install_is_write_once() {
    assert!(commands().is_none());

    let (installed_commands, installed_results) = simctl_commands::install().unwrap();
    assert!(installed_commands.contains("GetSimulatorState"));
    assert!(installed_results.contains("GetSimulatorStateResult"));
    assert!(std::ptr::eq(commands().unwrap(), installed_commands));
    assert!(std::ptr::eq(results().unwrap(), installed_results));

    assert_eq!(
        simctl_commands::install().unwrap_err(),
        RegistryError::AlreadyInstalled {
            registry: "command"
        }
    );
}
