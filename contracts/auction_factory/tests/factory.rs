use cosmwasm_std::{coins, Addr, Empty, Uint128};
use cw_multi_test::{App, Contract, ContractWrapper, Executor};

use auction_factory::error::ContractError;
use auction_factory::msg::{
    AuctionCountResponse, AuctionListResponse, AuctionResponse, ExecuteMsg, ImplementationSource,
    InstantiateMsg, MigrateMsg, NameResponse, QueryMsg,
};
use price_oracle::msg::Asset;

const DENOM: &str = "uatom";
const DAY: u64 = 86_400;

fn factory_contract() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            auction_factory::contract::execute,
            auction_factory::contract::instantiate,
            auction_factory::contract::query,
        )
        .with_reply(auction_factory::contract::reply)
        .with_migrate(auction_factory::contract::migrate),
    )
}

fn auction_contract() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            auction::contract::execute,
            auction::contract::instantiate,
            auction::contract::query,
        )
        .with_migrate(auction::contract::migrate),
    )
}

fn coordinator_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        upgrade_coordinator::contract::execute,
        upgrade_coordinator::contract::instantiate,
        upgrade_coordinator::contract::query,
    ))
}

fn oracle_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        price_oracle::contract::execute,
        price_oracle::contract::instantiate,
        price_oracle::contract::query,
    ))
}

fn collectible_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        collectible::contract::execute,
        collectible::contract::instantiate,
        collectible::contract::query,
    ))
}

struct Setup {
    app: App,
    factory_code: u64,
    auction_v1: u64,
    auction_v2: u64,
    oracle: Addr,
    collection: Addr,
}

fn setup() -> Setup {
    let mut app = App::new(|router, _, storage| {
        router
            .bank
            .init_balance(storage, &Addr::unchecked("bidder1"), coins(1_000_000, DENOM))
            .unwrap();
    });

    let factory_code = app.store_code(factory_contract());
    let auction_v1 = app.store_code(auction_contract());
    let auction_v2 = app.store_code(auction_contract());
    let oracle_code = app.store_code(oracle_contract());
    let collectible_code = app.store_code(collectible_contract());

    let oracle = app
        .instantiate_contract(
            oracle_code,
            Addr::unchecked("admin"),
            &price_oracle::msg::InstantiateMsg {
                owner: "admin".to_string(),
            },
            &[],
            "price_oracle",
            None,
        )
        .unwrap();

    let collection = app
        .instantiate_contract(
            collectible_code,
            Addr::unchecked("admin"),
            &collectible::msg::InstantiateMsg {
                name: "My Collectible".to_string(),
                symbol: "MYC".to_string(),
            },
            &[],
            "collectible",
            None,
        )
        .unwrap();

    Setup {
        app,
        factory_code,
        auction_v1,
        auction_v2,
        oracle,
        collection,
    }
}

fn instantiate_factory(s: &mut Setup, implementation: ImplementationSource) -> Addr {
    s.app
        .instantiate_contract(
            s.factory_code,
            Addr::unchecked("admin"),
            &InstantiateMsg {
                owner: "admin".to_string(),
                price_oracle: s.oracle.to_string(),
                bid_denom: DENOM.to_string(),
                implementation,
            },
            &[],
            "auction_factory",
            Some("admin".to_string()),
        )
        .unwrap()
}

/// Coordinator pointed at v1 plus a factory in coordinated mode, wired together
fn coordinated_setup(s: &mut Setup) -> (Addr, Addr) {
    let coordinator_code = s.app.store_code(coordinator_contract());
    let coordinator = s
        .app
        .instantiate_contract(
            coordinator_code,
            Addr::unchecked("admin"),
            &upgrade_coordinator::msg::InstantiateMsg {
                owner: "admin".to_string(),
                code_id: s.auction_v1,
            },
            &[],
            "upgrade_coordinator",
            None,
        )
        .unwrap();

    let factory = instantiate_factory(
        s,
        ImplementationSource::Coordinated {
            coordinator: coordinator.to_string(),
        },
    );

    s.app
        .execute_contract(
            Addr::unchecked("admin"),
            coordinator.clone(),
            &upgrade_coordinator::msg::ExecuteMsg::SetFactory {
                factory: factory.to_string(),
            },
            &[],
        )
        .unwrap();

    (factory, coordinator)
}

fn create_auction(s: &mut Setup, factory: &Addr, token_id: &str) -> Addr {
    s.app
        .execute_contract(
            Addr::unchecked("seller"),
            factory.clone(),
            &ExecuteMsg::CreateAuction {
                starting_price: Uint128::new(1_000),
                duration: DAY,
                collection: s.collection.to_string(),
                token_id: token_id.to_string(),
            },
            &[],
        )
        .unwrap();

    let count: AuctionCountResponse = s
        .app
        .wrap()
        .query_wasm_smart(factory, &QueryMsg::AuctionCount {})
        .unwrap();
    let auction: AuctionResponse = s
        .app
        .wrap()
        .query_wasm_smart(
            factory,
            &QueryMsg::Auction {
                auction_id: count.count,
            },
        )
        .unwrap();
    auction.address
}

fn code_id_of(s: &Setup, contract: &Addr) -> u64 {
    s.app.wrap().query_wasm_contract_info(contract).unwrap().code_id
}

/// Mint a fresh item to the seller, approve the auction, and open bidding
fn start_auction(s: &mut Setup, auction: &Addr, token_id: &str) {
    s.app
        .execute_contract(
            Addr::unchecked("seller"),
            s.collection.clone(),
            &collectible::msg::ExecuteMsg::Mint {
                token_id: token_id.to_string(),
                owner: None,
            },
            &[],
        )
        .unwrap();
    s.app
        .execute_contract(
            Addr::unchecked("seller"),
            s.collection.clone(),
            &collectible::msg::ExecuteMsg::Approve {
                spender: auction.to_string(),
                token_id: token_id.to_string(),
            },
            &[],
        )
        .unwrap();
    s.app
        .execute_contract(
            Addr::unchecked("seller"),
            auction.clone(),
            &auction::msg::ExecuteMsg::Start {},
            &[],
        )
        .unwrap();
}

#[test]
fn auction_identifiers_are_sequential_and_never_reused() {
    let mut s = setup();
    let auction_v1 = s.auction_v1;
    let factory = instantiate_factory(
        &mut s,
        ImplementationSource::Direct {
            code_id: auction_v1,
        },
    );

    for token_id in ["1", "2", "3"] {
        create_auction(&mut s, &factory, token_id);
    }

    let list: AuctionListResponse = s
        .app
        .wrap()
        .query_wasm_smart(
            &factory,
            &QueryMsg::AuctionList {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    let ids: Vec<u64> = list.auctions.iter().map(|a| a.auction_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    for entry in &list.auctions {
        assert_eq!(entry.seller.as_str(), "seller");
    }

    // unknown identifiers fail the lookup
    let err = s
        .app
        .wrap()
        .query_wasm_smart::<AuctionResponse>(&factory, &QueryMsg::Auction { auction_id: 5 });
    assert!(err.is_err());
}

#[test]
fn creation_parameters_are_validated_up_front() {
    let mut s = setup();
    let auction_v1 = s.auction_v1;
    let factory = instantiate_factory(
        &mut s,
        ImplementationSource::Direct {
            code_id: auction_v1,
        },
    );

    let err = s
        .app
        .execute_contract(
            Addr::unchecked("seller"),
            factory.clone(),
            &ExecuteMsg::CreateAuction {
                starting_price: Uint128::zero(),
                duration: DAY,
                collection: s.collection.to_string(),
                token_id: "1".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidStartingPrice {}
    );

    let err = s
        .app
        .execute_contract(
            Addr::unchecked("seller"),
            factory.clone(),
            &ExecuteMsg::CreateAuction {
                starting_price: Uint128::new(1_000),
                duration: DAY - 1,
                collection: s.collection.to_string(),
                token_id: "1".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::InvalidDuration {}
    );

    let count: AuctionCountResponse = s
        .app
        .wrap()
        .query_wasm_smart(&factory, &QueryMsg::AuctionCount {})
        .unwrap();
    assert_eq!(count.count, 0);
}

#[test]
fn direct_mode_changes_apply_only_to_new_auctions() {
    let mut s = setup();
    let auction_v1 = s.auction_v1;
    let factory = instantiate_factory(
        &mut s,
        ImplementationSource::Direct {
            code_id: auction_v1,
        },
    );

    let first = create_auction(&mut s, &factory, "1");
    assert_eq!(code_id_of(&s, &first), s.auction_v1);

    let v2 = s.auction_v2;
    s.app
        .execute_contract(
            Addr::unchecked("admin"),
            factory.clone(),
            &ExecuteMsg::SetImplementation {
                implementation: ImplementationSource::Direct { code_id: v2 },
            },
            &[],
        )
        .unwrap();

    let second = create_auction(&mut s, &factory, "2");
    assert_eq!(code_id_of(&s, &second), s.auction_v2);

    // the existing auction is untouched and has no admin to migrate it
    assert_eq!(code_id_of(&s, &first), s.auction_v1);
    let err = s
        .app
        .migrate_contract(
            Addr::unchecked("admin"),
            first,
            &auction::msg::MigrateMsg {},
            s.auction_v2,
        );
    assert!(err.is_err());
}

#[test]
fn coordinated_upgrade_reaches_every_existing_auction() {
    let mut s = setup();
    let (factory, coordinator) = coordinated_setup(&mut s);

    let first = create_auction(&mut s, &factory, "1");
    let second = create_auction(&mut s, &factory, "2");
    assert_eq!(code_id_of(&s, &first), s.auction_v1);
    assert_eq!(code_id_of(&s, &second), s.auction_v1);

    // put live state into the first auction before the upgrade
    start_auction(&mut s, &first, "1");
    s.app
        .execute_contract(
            Addr::unchecked("bidder1"),
            first.clone(),
            &auction::msg::ExecuteMsg::Bid {
                asset: Asset::Native {},
                amount: Uint128::new(2_000),
            },
            &coins(2_000, DENOM),
        )
        .unwrap();

    let v2 = s.auction_v2;
    s.app
        .execute_contract(
            Addr::unchecked("admin"),
            coordinator,
            &upgrade_coordinator::msg::ExecuteMsg::UpgradeTo { code_id: v2 },
            &[],
        )
        .unwrap();

    // both instances moved in one transaction
    assert_eq!(code_id_of(&s, &first), s.auction_v2);
    assert_eq!(code_id_of(&s, &second), s.auction_v2);

    // state survived the migration
    let info: auction::msg::InfoResponse = s
        .app
        .wrap()
        .query_wasm_smart(&first, &auction::msg::QueryMsg::Info {})
        .unwrap();
    assert_eq!(info.highest_bid, Uint128::new(2_000));
    assert_eq!(info.highest_bidder, Some(Addr::unchecked("bidder1")));
}

#[test]
fn display_name_hook_runs_once_after_an_upgrade() {
    let mut s = setup();
    let (factory, coordinator) = coordinated_setup(&mut s);

    let auction_addr = create_auction(&mut s, &factory, "1");
    let v2 = s.auction_v2;
    s.app
        .execute_contract(
            Addr::unchecked("admin"),
            coordinator,
            &upgrade_coordinator::msg::ExecuteMsg::UpgradeTo { code_id: v2 },
            &[],
        )
        .unwrap();

    s.app
        .execute_contract(
            Addr::unchecked("seller"),
            auction_addr.clone(),
            &auction::msg::ExecuteMsg::SetDisplayName {
                name: "poly auctioning".to_string(),
            },
            &[],
        )
        .unwrap();

    let name: auction::msg::DisplayNameResponse = s
        .app
        .wrap()
        .query_wasm_smart(&auction_addr, &auction::msg::QueryMsg::DisplayName {})
        .unwrap();
    assert_eq!(name.name.as_deref(), Some("poly auctioning"));

    let err = s
        .app
        .execute_contract(
            Addr::unchecked("seller"),
            auction_addr,
            &auction::msg::ExecuteMsg::SetDisplayName {
                name: "again".to_string(),
            },
            &[],
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<auction::error::ContractError>().unwrap(),
        auction::error::ContractError::AlreadyInitialized {}
    );
}

#[test]
fn factory_migration_step_runs_once() {
    let mut s = setup();
    let auction_v1 = s.auction_v1;
    let factory = instantiate_factory(
        &mut s,
        ImplementationSource::Direct {
            code_id: auction_v1,
        },
    );

    let factory_code = s.factory_code;
    s.app
        .migrate_contract(
            Addr::unchecked("admin"),
            factory.clone(),
            &MigrateMsg {
                name: "poly auction".to_string(),
            },
            factory_code,
        )
        .unwrap();

    let name: NameResponse = s
        .app
        .wrap()
        .query_wasm_smart(&factory, &QueryMsg::Name {})
        .unwrap();
    assert_eq!(name.name.as_deref(), Some("poly auction"));

    let err = s
        .app
        .migrate_contract(
            Addr::unchecked("admin"),
            factory,
            &MigrateMsg {
                name: "again".to_string(),
            },
            factory_code,
        )
        .unwrap_err();
    assert_eq!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::AlreadyMigrated {}
    );
}
