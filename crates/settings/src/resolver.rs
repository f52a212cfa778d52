//! Settings resolution
//!
//! Resolution is total: a missing variable leaves the matching field unset
//! instead of failing. Run [`crate::validate`] before handing the settings to
//! anything that compiles or talks to a node.

use tracing::debug;

use crate::compiler::CompilerProfile;
use crate::env::{EnvInputs, PRIVATE_KEY_VAR};
use crate::network::{Network, NetworkProfile};
use crate::settings::Settings;

/// Build settings from an environment snapshot
///
/// Set values are copied verbatim, empty strings included. The compiler
/// profile and chain ids are fixed.
pub fn resolve(env: &EnvInputs) -> Settings {
    let key = env.get(PRIVATE_KEY_VAR).map(str::to_string);

    let networks = Network::ALL
        .iter()
        .map(|&network| {
            let url = env.get(network.endpoint_var()).map(str::to_string);
            debug!(
                network = %network,
                endpoint_set = url.is_some(),
                key_set = key.is_some(),
                "Resolved network profile"
            );
            (network, NetworkProfile::new(network, url, key.clone()))
        })
        .collect();

    Settings {
        compiler: CompilerProfile::default(),
        networks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::GasPrice;

    fn inputs(pairs: &[(&str, &str)]) -> EnvInputs {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_resolve_all_present() {
        let settings = resolve(&inputs(&[
            ("PRIVATEKEY", "0xabc"),
            ("GOERLI_NETWORK", "https://g.example"),
            ("MUMBAI_NETWORK", "https://m.example"),
        ]));

        assert_eq!(
            settings.network(Network::Goerli),
            Some(&NetworkProfile {
                endpoint_url: Some("https://g.example".to_string()),
                chain_id: 5,
                gas_price: GasPrice::Auto,
                accounts: vec![Some("0xabc".to_string())],
            })
        );
        assert_eq!(
            settings.network(Network::Mumbai),
            Some(&NetworkProfile {
                endpoint_url: Some("https://m.example".to_string()),
                chain_id: 80001,
                gas_price: GasPrice::Auto,
                accounts: vec![Some("0xabc".to_string())],
            })
        );
    }

    #[test]
    fn test_resolve_all_absent() {
        let settings = resolve(&EnvInputs::new());

        assert_eq!(settings.networks.len(), 2);
        for network in Network::ALL {
            let profile = settings.network(network).unwrap();
            assert_eq!(profile.endpoint_url, None);
            assert_eq!(profile.accounts, vec![None]);
            assert_eq!(profile.chain_id, network.chain_id());
            assert_eq!(profile.gas_price, GasPrice::Auto);
        }
    }

    #[test]
    fn test_resolve_partial() {
        let settings = resolve(&inputs(&[("MUMBAI_NETWORK", "https://m.example")]));

        let goerli = settings.network(Network::Goerli).unwrap();
        let mumbai = settings.network(Network::Mumbai).unwrap();
        assert_eq!(goerli.endpoint_url, None);
        assert_eq!(mumbai.endpoint_url.as_deref(), Some("https://m.example"));
        assert_eq!(mumbai.accounts, vec![None]);
    }

    #[test]
    fn test_compiler_ignores_environment() {
        let settings = resolve(&inputs(&[
            ("PRIVATEKEY", "0xabc"),
            ("SOLC_VERSION", "0.4.0"),
            ("OPTIMIZER_RUNS", "1"),
        ]));
        assert_eq!(settings.compiler, CompilerProfile::default());
        assert_eq!(settings.compiler.version, "0.8.17");
        assert!(settings.compiler.optimizer_enabled);
        assert_eq!(settings.compiler.optimizer_runs, 200);
    }

    #[test]
    fn test_values_copied_verbatim() {
        let settings = resolve(&inputs(&[
            ("PRIVATEKEY", "  not-a-key  "),
            ("GOERLI_NETWORK", ""),
        ]));
        let goerli = settings.network(Network::Goerli).unwrap();
        assert_eq!(goerli.endpoint_url.as_deref(), Some(""));
        assert_eq!(goerli.accounts, vec![Some("  not-a-key  ".to_string())]);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let env = inputs(&[("PRIVATEKEY", "0xabc"), ("GOERLI_NETWORK", "https://g.example")]);
        assert_eq!(resolve(&env), resolve(&env));
    }

    #[test]
    fn test_network_order_is_fixed() {
        let settings = resolve(&EnvInputs::new());
        let order: Vec<Network> = settings.networks.keys().copied().collect();
        assert_eq!(order, vec![Network::Goerli, Network::Mumbai]);
    }
}
