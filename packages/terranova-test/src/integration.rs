#[cfg(test)]
mod integration_tests {
    use cosmwasm_std::{Binary, Uint256};
    use terranova_rs::{
        client::Client,
        counter::GetCountResponse,
        evm::EvmAddress,
        migrations::{Artifact, InitialMigration, TerranovaDeployer},
        terranova::{EvmAccountResponse, RawEthereumQueryResponse, TerranovaQueryMsg},
    };

    use crate::harness::TerranovaTestApp;

    // nonce 1, gas price 1, gas limit 100000, value 123456
    const TRANSFER_TX: &str =
        "e00101830186a094b34e2213751c5d8e9a31755fca6f1b4fa5bb6be18301e24080";

    fn sender() -> EvmAddress {
        "0xb34e2213751c5d8e9a31355fca6f1b4fa5bb6be1".parse().unwrap()
    }

    fn receiver() -> EvmAddress {
        "0xb34e2213751c5d8e9a31755fca6f1b4fa5bb6be1".parse().unwrap()
    }

    fn transfer_tx() -> Binary {
        Binary::from(hex::decode(TRANSFER_TX).unwrap())
    }

    fn initial_migration() -> InitialMigration {
        InitialMigration {
            storage: Artifact::from_hex("Storage", "0x6080604052348015600f57600080fd5b50").unwrap(),
            migrations: Artifact::from_hex("Migrations", "0x608060405260043610603f57").unwrap(),
        }
    }

    #[test]
    fn initial_migration_deploys_storage_then_migrations() {
        let mut harness = TerranovaTestApp::setup();
        let validator = harness.wallets.validator.clone();

        let (addresses, deployed) = {
            let mut deployer = TerranovaDeployer::new(
                &mut harness,
                validator,
                "terranova",
                EvmAddress::new([0xaa; 20]),
            );
            let addresses = initial_migration().run(&mut deployer).unwrap();
            (addresses, deployer.deployed().to_vec())
        };

        assert_eq!(
            deployed
                .iter()
                .map(|(name, _)| name.as_str())
                .collect::<Vec<_>>(),
            vec!["Storage", "Migrations"]
        );

        let storage = harness.query_evm_account(addresses[0]);
        assert!(storage.is_contract);
        assert_eq!(storage.code_size, 17);

        let code: Binary = harness
            .query(
                "terranova",
                &TerranovaQueryMsg::ContractCode {
                    address: addresses[1],
                },
            )
            .unwrap();
        assert_eq!(code, initial_migration().migrations.bytecode);
    }

    #[test]
    fn rerunning_the_migration_fails() {
        let mut harness = TerranovaTestApp::setup();
        let validator = harness.wallets.validator.clone();
        let origin = EvmAddress::new([0xaa; 20]);

        initial_migration()
            .run(&mut TerranovaDeployer::new(
                &mut harness,
                validator.clone(),
                "terranova",
                origin,
            ))
            .unwrap();

        let err = initial_migration()
            .run(&mut TerranovaDeployer::new(
                &mut harness,
                validator,
                "terranova",
                origin,
            ))
            .unwrap_err();

        assert!(err.root_cause().to_string().contains("already exists"));
    }

    #[test]
    fn resumed_migration_deploys_new_accounts() {
        let mut harness = TerranovaTestApp::setup();
        let validator = harness.wallets.validator.clone();
        let origin = EvmAddress::new([0xaa; 20]);

        let first = initial_migration()
            .run(&mut TerranovaDeployer::new(
                &mut harness,
                validator.clone(),
                "terranova",
                origin,
            ))
            .unwrap();

        let second = initial_migration()
            .run(
                &mut TerranovaDeployer::new(&mut harness, validator, "terranova", origin)
                    .with_nonce(2),
            )
            .unwrap();

        assert!(second.iter().all(|address| !first.contains(address)));
        assert!(harness.query_evm_account(second[1]).is_contract);
    }

    #[test]
    fn raw_ethereum_query_does_not_change_state() {
        let mut harness = TerranovaTestApp::setup();
        harness
            .airdrop(sender(), Uint256::from(100_000_000u128))
            .unwrap();

        let response: RawEthereumQueryResponse = harness
            .query(
                "terranova",
                &TerranovaQueryMsg::RawEthereumQuery {
                    caller_evm_address: sender(),
                    unsigned_tx: transfer_tx(),
                },
            )
            .unwrap();

        assert_eq!(response.result, Binary::default());

        let account = harness.query_evm_account(sender());
        assert_eq!(account.balance, Uint256::from(100_000_000u128));
        assert_eq!(account.nonce, 0);
        assert_eq!(
            harness.query_evm_account(receiver()).balance,
            Uint256::zero()
        );
    }

    #[test]
    fn send_tx_transfers_value() {
        let mut harness = TerranovaTestApp::setup();
        harness
            .airdrop(sender(), Uint256::from(100_000_000u128))
            .unwrap();

        let mut lib = harness.into_lib();

        let response = lib.send_tx(sender(), transfer_tx(), None).unwrap();

        assert!(response
            .events
            .iter()
            .any(|event| event.ty == "wasm-_transaction_executed"));

        let sender_account: EvmAccountResponse = lib.client().query_evm_account(sender());
        assert_eq!(sender_account.balance, Uint256::from(99_876_544u128));
        assert_eq!(sender_account.nonce, 1);

        let receiver_account = lib.client().query_evm_account(receiver());
        assert_eq!(receiver_account.balance, Uint256::from(123_456u128));
    }

    #[test]
    fn send_tx_from_unauthorized_signer_fails() {
        let mut harness = TerranovaTestApp::setup();
        harness
            .airdrop(sender(), Uint256::from(100_000_000u128))
            .unwrap();
        let alice = harness.wallet("alice");

        let mut lib = harness.into_lib();

        let err = lib
            .send_tx(sender(), transfer_tx(), Some(&alice))
            .unwrap_err();

        assert!(err.root_cause().to_string().contains("Unauthorized"));
        assert_eq!(
            lib.client().query_evm_account(sender()).balance,
            Uint256::from(100_000_000u128)
        );
    }

    #[test]
    fn send_tx_without_funds_leaves_state_untouched() {
        let mut lib = TerranovaTestApp::setup().into_lib();

        let err = lib.send_tx(sender(), transfer_tx(), None).unwrap_err();

        assert!(err.root_cause().to_string().contains("insufficient funds"));

        let account = lib.client().query_evm_account(sender());
        assert_eq!(account.nonce, 0);
        assert_eq!(account.balance, Uint256::zero());
    }

    #[test]
    fn get_count_reads_counter() {
        let mut harness = TerranovaTestApp::setup();
        harness.increment_counter().unwrap();
        harness.increment_counter().unwrap();

        let lib = harness.into_lib();

        assert_eq!(lib.get_count().unwrap(), GetCountResponse { count: 2 });
    }
}
