//! SmallBank-derived transaction templates, used as realistic fixtures for
//! robustness tests (spec §8).
//!
//! Every template here is a direct transcription of the SmallBank benchmark's
//! five stored procedures (`Balance`, `DepositChecking`, `TransactSavings`,
//! `Amalgamate`, `WriteCheck`), plus "promoted" variants that add extra
//! writesets to a base operation -- used to explore how promoting a single
//! read to a read-write changes a template set's robust allocations.

use trobust_core::{Operation, Template, TemplateSet};

const VAR_X: &str = "X";
const VAR_Y: &str = "Y";
const VAR_Z: &str = "Z";
const VAR_X1: &str = "X1";
const VAR_X2: &str = "X2";
const VAR_Y1: &str = "Y1";
const VAR_Z1: &str = "Z1";
const VAR_Z2: &str = "Z2";

const R_ACCOUNT: &str = "Account";
const R_SAVINGS: &str = "Savings";
const R_CHECKING: &str = "Checking";

const A_NAME: &str = "Name";
const A_CUSTOMER_ID: &str = "CustomerID";
const A_BALANCE: &str = "Balance";

type SbOperation = Operation<&'static str, &'static str, &'static str>;
type SbTemplate = Template<&'static str, &'static str, &'static str, &'static str>;
type SbTemplateSet = TemplateSet<&'static str, &'static str, &'static str, &'static str>;

fn read(variable: &'static str, relation: &'static str, attrs: &[&'static str]) -> SbOperation {
    Operation::read(variable, relation, attrs.iter().copied())
}

fn read_write(
    variable: &'static str,
    relation: &'static str,
    read_attrs: &[&'static str],
    write_attrs: &[&'static str],
) -> SbOperation {
    Operation::read_write(variable, relation, read_attrs.iter().copied(), write_attrs.iter().copied())
}

/// `Balance`: read the account, its savings balance and its checking
/// balance. `promote_savings`/`promote_checking` additionally write
/// `Balance` on the corresponding operation (the `_pr2`/`_pr3`/`_pr23`
/// variants).
#[must_use]
pub fn balance(name: &'static str, promote_savings: bool, promote_checking: bool) -> SbTemplate {
    let savings_write = if promote_savings { &[A_BALANCE][..] } else { &[][..] };
    let checking_write = if promote_checking { &[A_BALANCE][..] } else { &[][..] };
    Template::new(
        name,
        vec![
            read(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID]),
            read_write(VAR_Y, R_SAVINGS, &[A_CUSTOMER_ID, A_BALANCE], savings_write),
            read_write(VAR_Z, R_CHECKING, &[A_CUSTOMER_ID, A_BALANCE], checking_write),
        ],
    )
}

/// `Balance` with its account lookup also promoted to write `CustomerID`
/// (the `_pr1` variant).
#[must_use]
pub fn balance_account_promoted(name: &'static str) -> SbTemplate {
    Template::new(
        name,
        vec![
            read_write(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID], &[A_CUSTOMER_ID]),
            read(VAR_Y, R_SAVINGS, &[A_CUSTOMER_ID, A_BALANCE]),
            read(VAR_Z, R_CHECKING, &[A_CUSTOMER_ID, A_BALANCE]),
        ],
    )
}

/// `DepositChecking`: read the account, add to the checking balance.
#[must_use]
pub fn deposit_checking(name: &'static str, promote_account: bool) -> SbTemplate {
    let account = if promote_account {
        read_write(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID], &[A_CUSTOMER_ID])
    } else {
        read(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID])
    };
    Template::new(
        name,
        vec![account, read_write(VAR_Z, R_CHECKING, &[A_CUSTOMER_ID, A_BALANCE], &[A_BALANCE])],
    )
}

/// `TransactSavings`: read the account, add to the savings balance.
#[must_use]
pub fn transact_savings(name: &'static str, promote_account: bool) -> SbTemplate {
    let account = if promote_account {
        read_write(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID], &[A_CUSTOMER_ID])
    } else {
        read(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID])
    };
    Template::new(
        name,
        vec![account, read_write(VAR_Y, R_SAVINGS, &[A_CUSTOMER_ID, A_BALANCE], &[A_BALANCE])],
    )
}

/// `Amalgamate`: move the entire savings balance of customer 1 into the
/// checking balance of customer 2.
#[must_use]
pub fn amalgamate(name: &'static str, promote_accounts: bool) -> SbTemplate {
    let (x1, x2) = if promote_accounts {
        (
            read_write(VAR_X1, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID], &[A_CUSTOMER_ID]),
            read_write(VAR_X2, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID], &[A_CUSTOMER_ID]),
        )
    } else {
        (
            read(VAR_X1, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID]),
            read(VAR_X2, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID]),
        )
    };
    Template::new(
        name,
        vec![
            x1,
            x2,
            read_write(VAR_Y1, R_SAVINGS, &[A_CUSTOMER_ID, A_BALANCE], &[A_BALANCE]),
            read_write(VAR_Z1, R_CHECKING, &[A_CUSTOMER_ID, A_BALANCE], &[A_BALANCE]),
            read_write(VAR_Z2, R_CHECKING, &[A_CUSTOMER_ID, A_BALANCE], &[A_BALANCE]),
        ],
    )
}

/// `WriteCheck`: read the account and savings balance, then write a check
/// against checking (reading and then writing the checking balance as two
/// separate operations on the same variable `Z`).
#[must_use]
pub fn write_check(name: &'static str, promote_savings: bool, promote_checking_read: bool) -> SbTemplate {
    let savings_write = if promote_savings { &[A_BALANCE][..] } else { &[][..] };
    Template::new(
        name,
        vec![
            read(VAR_X, R_ACCOUNT, &[A_NAME, A_CUSTOMER_ID]),
            read_write(VAR_Y, R_SAVINGS, &[A_CUSTOMER_ID, A_BALANCE], savings_write),
            read_write(
                VAR_Z,
                R_CHECKING,
                &[A_CUSTOMER_ID, A_BALANCE],
                if promote_checking_read { &[A_BALANCE][..] } else { &[][..] },
            ),
            read_write(VAR_Z, R_CHECKING, &[A_CUSTOMER_ID, A_BALANCE], &[A_BALANCE]),
        ],
    )
}

/// One of the 17 fixed SmallBank template-set variants, keyed the same way
/// as the scenario names used in robustness experiments over this benchmark
/// (`"default"`, `"prom_accounts"`, `"pr_c_<savings-promotion>_<checking-promotion>"`
/// where the promotion code is `0` (none), `2` (savings only), `3` (checking
/// only) or `23` (both)).
///
/// # Panics
///
/// Panics if `name` is not one of the known scenario names.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn scenario(name: &str) -> SbTemplateSet {
    let dc = deposit_checking("DepositChecking", false);
    let ts = transact_savings("TransactSavings", false);
    let am = amalgamate("Amalgamate", false);
    let dc_pr1 = deposit_checking("DepositChecking_pr1", true);
    let ts_pr1 = transact_savings("TransactSavings_pr1", true);
    let am_pr12 = amalgamate("Amalgamate_pr12", true);

    match name {
        "default" => TemplateSet::new([
            balance("Balance", false, false),
            dc,
            ts,
            am,
            write_check("WriteCheck", false, false),
        ]),
        "prom_accounts" => TemplateSet::new([
            balance_account_promoted("Balance_pr1"),
            dc_pr1,
            ts_pr1,
            am_pr12,
            write_check("WriteCheck_pr1", false, true),
        ]),
        "pr_c_0_2" => TemplateSet::new([balance("Balance", false, false), dc, ts, am, write_check("WriteCheck_pr2", true, false)]),
        "pr_c_0_3" => TemplateSet::new([balance("Balance", false, false), dc, ts, am, write_check("WriteCheck_pr3", false, true)]),
        "pr_c_0_23" => TemplateSet::new([balance("Balance", false, false), dc, ts, am, write_check("WriteCheck_pr23", true, true)]),
        "pr_c_2_0" => TemplateSet::new([balance("Balance_pr2", true, false), dc, ts, am, write_check("WriteCheck", false, false)]),
        "pr_c_3_0" => TemplateSet::new([balance("Balance_pr3", false, true), dc, ts, am, write_check("WriteCheck", false, false)]),
        "pr_c_23_0" => TemplateSet::new([balance("Balance_pr23", true, true), dc, ts, am, write_check("WriteCheck", false, false)]),
        "pr_c_2_2" => TemplateSet::new([balance("Balance_pr2", true, false), dc, ts, am, write_check("WriteCheck_pr2", true, false)]),
        "pr_c_2_3" => TemplateSet::new([balance("Balance_pr2", true, false), dc, ts, am, write_check("WriteCheck_pr3", false, true)]),
        "pr_c_2_23" => TemplateSet::new([balance("Balance_pr2", true, false), dc, ts, am, write_check("WriteCheck_pr23", true, true)]),
        "pr_c_3_2" => TemplateSet::new([balance("Balance_pr3", false, true), dc, ts, am, write_check("WriteCheck_pr2", true, false)]),
        "pr_c_3_3" => TemplateSet::new([balance("Balance_pr3", false, true), dc, ts, am, write_check("WriteCheck_pr3", false, true)]),
        "pr_c_3_23" => TemplateSet::new([balance("Balance_pr3", false, true), dc, ts, am, write_check("WriteCheck_pr23", true, true)]),
        "pr_c_23_2" => TemplateSet::new([balance("Balance_pr23", true, true), dc, ts, am, write_check("WriteCheck_pr2", true, false)]),
        "pr_c_23_3" => TemplateSet::new([balance("Balance_pr23", true, true), dc, ts, am, write_check("WriteCheck_pr3", false, true)]),
        "pr_c_23_23" => TemplateSet::new([balance("Balance_pr23", true, true), dc, ts, am, write_check("WriteCheck_pr23", true, true)]),
        other => panic!("unknown SmallBank scenario {other:?}"),
    }
}
