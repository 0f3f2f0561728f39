use colored::Colorize;
use once_cell::sync::Lazy;
use uuid::Uuid;

use crate::core::services::{
    parse_amount, parse_quantity, ExpenseService, LedgerService, LoanService, ServiceError,
    ServiceResult, SummaryService,
};
use crate::domain::{dates, DaySheet, Identifiable, ItemField, OversellPolicy, Venue};

use super::state::ShellState;
use super::table::{Table, TableColumn};
use super::{output, CliError, LoopControl};

pub struct CommandSpec {
    pub name: &'static str,
    pub usage: &'static str,
    pub summary: &'static str,
}

pub static COMMANDS: Lazy<Vec<CommandSpec>> = Lazy::new(|| {
    vec![
        CommandSpec { name: "open", usage: "open <venue> [date]", summary: "Switch to a venue page (bar, kitchen, gym, guesthouse, billiard)" },
        CommandSpec { name: "list", usage: "list", summary: "Show the day sheet for the open venue" },
        CommandSpec { name: "add", usage: "add <name> <cost> <price> [opening]", summary: "Register a product/service for the open date" },
        CommandSpec { name: "entree", usage: "entree <row> <qty>", summary: "Set stock received for a row" },
        CommandSpec { name: "sold", usage: "sold <row> <qty>", summary: "Set units sold for a row" },
        CommandSpec { name: "price", usage: "price <row> <cost> <price>", summary: "Correct a row's unit prices" },
        CommandSpec { name: "takings", usage: "takings [cash momo]", summary: "Record or show the cash/momo split" },
        CommandSpec { name: "next", usage: "next", summary: "Move the date forward one day (never past today)" },
        CommandSpec { name: "prev", usage: "prev", summary: "Move the date back one day" },
        CommandSpec { name: "goto", usage: "goto <date>", summary: "Jump to a date (YYYY-MM-DD)" },
        CommandSpec { name: "summary", usage: "summary", summary: "Business totals across all venues for the open date" },
        CommandSpec { name: "expenses", usage: "expenses [date|all]", summary: "List expenses with totals" },
        CommandSpec { name: "expense-add", usage: "expense-add <name> <amount> <yes|no> [date]", summary: "Record an expense (yes = profit-generating)" },
        CommandSpec { name: "loans", usage: "loans <employee>", summary: "Show an employee's loans and totals" },
        CommandSpec { name: "loan-add", usage: "loan-add <employee> <amount>", summary: "Grant a loan" },
        CommandSpec { name: "loan-pay", usage: "loan-pay <employee> <row> <amount>", summary: "Record a repayment installment" },
        CommandSpec { name: "policy", usage: "policy [reject|clamp|allow]", summary: "Show or set the oversell policy" },
        CommandSpec { name: "help", usage: "help", summary: "Show this help" },
        CommandSpec { name: "exit", usage: "exit", summary: "Leave the shell" },
    ]
});

pub fn command_names() -> Vec<String> {
    COMMANDS.iter().map(|spec| spec.name.to_string()).collect()
}

/// Parses and runs one input line. Validation and storage errors are reported
/// and the loop continues; only I/O plumbing failures bubble up.
pub fn handle_line(state: &mut ShellState, line: &str) -> Result<LoopControl, CliError> {
    let words = match shell_words::split(line) {
        Ok(words) => words,
        Err(err) => {
            output::error(&format!("could not parse input: {}", err));
            return Ok(LoopControl::Continue);
        }
    };
    let Some((command, args)) = words.split_first() else {
        return Ok(LoopControl::Continue);
    };

    match command.as_str() {
        "exit" | "quit" => return Ok(LoopControl::Exit),
        "help" => show_help(),
        other => {
            let result = dispatch(state, other, args);
            if let Err(err) = result {
                output::error(&err.to_string());
            }
        }
    }
    Ok(LoopControl::Continue)
}

fn dispatch(state: &mut ShellState, command: &str, args: &[String]) -> ServiceResult<()> {
    match command {
        "open" => cmd_open(state, args),
        "list" => cmd_list(state),
        "add" => cmd_add(state, args),
        "entree" => cmd_quantity(state, args, ItemField::StockIn),
        "sold" => cmd_quantity(state, args, ItemField::Sold),
        "price" => cmd_price(state, args),
        "takings" => cmd_takings(state, args),
        "next" => cmd_shift(state, 1),
        "prev" => cmd_shift(state, -1),
        "goto" => cmd_goto(state, args),
        "summary" => cmd_summary(state),
        "expenses" => cmd_expenses(state, args),
        "expense-add" => cmd_expense_add(state, args),
        "loans" => cmd_loans(state, args),
        "loan-add" => cmd_loan_add(state, args),
        "loan-pay" => cmd_loan_pay(state, args),
        "policy" => cmd_policy(state, args),
        unknown => {
            let mut message = format!("unknown command `{}`", unknown);
            if let Some(close) = closest_command(unknown) {
                message.push_str(&format!(", did you mean `{}`?", close));
            }
            Err(ServiceError::Invalid(message))
        }
    }
}

fn closest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|spec| (spec.name, strsim::jaro_winkler(input, spec.name)))
        .filter(|(_, score)| *score > 0.8)
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(name, _)| name)
}

fn show_help() {
    let mut table = Table::new(vec![TableColumn::left("Command"), TableColumn::left("Description")]);
    for spec in COMMANDS.iter() {
        table.add_row(vec![spec.usage.to_string(), spec.summary.to_string()]);
    }
    for line in table.render_lines() {
        output::info(&line);
    }
}

fn arg<'a>(args: &'a [String], idx: usize, usage: &str) -> ServiceResult<&'a str> {
    args.get(idx)
        .map(String::as_str)
        .ok_or_else(|| ServiceError::Invalid(format!("usage: {}", usage)))
}

fn parse_venue(raw: &str) -> ServiceResult<Venue> {
    raw.parse().map_err(ServiceError::Invalid)
}

fn parse_cli_date(raw: &str) -> ServiceResult<chrono::NaiveDate> {
    dates::parse_date(raw).map_err(ServiceError::Invalid)
}

fn resolve_row<T: Identifiable>(rows: &[T], raw: &str) -> ServiceResult<Uuid> {
    let row: usize = raw
        .trim()
        .parse()
        .map_err(|_| ServiceError::Invalid(format!("`{}` is not a row number", raw)))?;
    let idx = row
        .checked_sub(1)
        .ok_or_else(|| ServiceError::Invalid("row numbers start at 1".into()))?;
    rows.get(idx).map(Identifiable::id).ok_or_else(|| {
        ServiceError::Invalid(format!(
            "row {} is out of range, there are {} rows",
            row,
            rows.len()
        ))
    })
}

fn fmt_money(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn cmd_open(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let venue = parse_venue(arg(args, 0, "open <venue> [date]")?)?;
    let date = match args.get(1) {
        Some(raw) => Some(parse_cli_date(raw)?),
        None => None,
    };
    state.open(venue, date);
    output::success(&format!("Opened {} for {}.", state.venue, state.date));
    cmd_list(state)
}

fn cmd_list(state: &mut ShellState) -> ServiceResult<()> {
    let sheet = LedgerService::day_sheet_or_empty(&state.store, state.venue, state.date);
    render_sheet(state, &sheet);
    Ok(())
}

fn render_sheet(state: &ShellState, sheet: &DaySheet) {
    output::info(&format!("{} - {}", state.venue, sheet.date));
    if sheet.is_empty() {
        output::info("No records for this date.");
    } else {
        let mut table = Table::new(vec![
            TableColumn::right("#"),
            TableColumn::left("Name"),
            TableColumn::right("Cost"),
            TableColumn::right("Price"),
            TableColumn::right("Opening"),
            TableColumn::right("Entree"),
            TableColumn::right("Sold"),
            TableColumn::right("Closing"),
            TableColumn::right("Revenue"),
            TableColumn::right("Profit"),
        ]);
        for (idx, item) in sheet.items.iter().enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                item.name.clone(),
                fmt_money(item.unit_cost),
                fmt_money(item.unit_price),
                item.opening_stock.to_string(),
                item.stock_in.to_string(),
                item.sold.to_string(),
                item.closing_stock().to_string(),
                fmt_money(item.sales_revenue()),
                fmt_money(item.profit()),
            ]);
        }
        let lines = table.render_lines();
        for (idx, line) in lines.iter().enumerate() {
            // First two lines are the header and rule.
            match idx.checked_sub(2).and_then(|row| sheet.items.get(row)) {
                Some(item) if item.is_deficit() => println!("{}", line.red()),
                Some(item) if item.is_low_stock() => println!("{}", line.yellow()),
                _ => output::info(line),
            }
        }
    }
    let aggregate = &sheet.aggregate;
    output::info(&format!(
        "Totals ({currency}): sales {sales}, profit {profit}, stock value {stock}, low-stock items {low}",
        currency = state.config.currency,
        sales = fmt_money(aggregate.total_sales),
        profit = fmt_money(aggregate.total_profit),
        stock = fmt_money(aggregate.total_stock_value),
        low = aggregate.low_stock_count,
    ));
}

fn cmd_add(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let usage = "add <name> <cost> <price> [opening]";
    let name = arg(args, 0, usage)?;
    let unit_cost = parse_amount(arg(args, 1, usage)?)?;
    let unit_price = parse_amount(arg(args, 2, usage)?)?;
    let opening = match args.get(3) {
        Some(raw) => parse_quantity(raw)?,
        None => 0,
    };
    let item = LedgerService::add_item(
        &mut state.store,
        state.venue,
        state.date,
        name,
        unit_cost,
        unit_price,
        opening,
    )?;
    output::success(&format!("Added `{}`.", item.name));
    cmd_list(state)
}

fn cmd_quantity(state: &mut ShellState, args: &[String], field: ItemField) -> ServiceResult<()> {
    let usage = match field {
        ItemField::StockIn => "entree <row> <qty>",
        ItemField::Sold => "sold <row> <qty>",
    };
    let sheet = LedgerService::day_sheet(&state.store, state.venue, state.date)?;
    let id = resolve_row(&sheet.items, arg(args, 0, usage)?)?;
    let value = parse_quantity(arg(args, 1, usage)?)?;
    let policy = state.policy();
    LedgerService::update_quantity(&mut state.store, state.venue, id, field, value, policy)?;
    // Re-fetch so the rendered aggregate reflects the store's answer.
    cmd_list(state)
}

fn cmd_price(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let usage = "price <row> <cost> <price>";
    let sheet = LedgerService::day_sheet(&state.store, state.venue, state.date)?;
    let id = resolve_row(&sheet.items, arg(args, 0, usage)?)?;
    let unit_cost = parse_amount(arg(args, 1, usage)?)?;
    let unit_price = parse_amount(arg(args, 2, usage)?)?;
    LedgerService::update_prices(&mut state.store, state.venue, id, unit_cost, unit_price)?;
    cmd_list(state)
}

fn cmd_takings(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    if args.is_empty() {
        let (records, totals) =
            LedgerService::takings_summary(&state.store, state.venue, state.date)?;
        if records.is_empty() {
            output::info("No takings recorded for this date.");
        }
        for record in &records {
            output::info(&format!(
                "cash {}, momo {}, total {}",
                fmt_money(record.cash),
                fmt_money(record.momo),
                fmt_money(record.total())
            ));
        }
        output::info(&format!(
            "Takings total: cash {}, momo {}, overall {}",
            fmt_money(totals.cash),
            fmt_money(totals.momo),
            fmt_money(totals.total)
        ));
        return Ok(());
    }
    let usage = "takings [cash momo]";
    let cash = parse_amount(arg(args, 0, usage)?)?;
    let momo = parse_amount(arg(args, 1, usage)?)?;
    let record =
        LedgerService::record_takings(&mut state.store, state.venue, state.date, cash, momo)?;
    output::success(&format!("Recorded takings of {}.", fmt_money(record.total())));
    Ok(())
}

fn cmd_shift(state: &mut ShellState, delta: i64) -> ServiceResult<()> {
    let shifted = dates::shift_date_clamped(state.date, delta);
    if shifted == state.date && delta > 0 {
        output::warn("Already at today; cannot move forward.");
    } else {
        state.date = shifted;
    }
    cmd_list(state)
}

fn cmd_goto(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    state.date = parse_cli_date(arg(args, 0, "goto <date>")?)?;
    cmd_list(state)
}

fn cmd_summary(state: &mut ShellState) -> ServiceResult<()> {
    let summary = SummaryService::business_totals(&state.store, state.date)?;
    let mut table = Table::new(vec![
        TableColumn::left("Venue"),
        TableColumn::right("Sales"),
        TableColumn::right("Profit"),
        TableColumn::right("Low stock"),
    ]);
    for line in &summary.venues {
        table.add_row(vec![
            line.venue.label().to_string(),
            fmt_money(line.total_sales),
            fmt_money(line.total_profit),
            line.low_stock_count.to_string(),
        ]);
    }
    output::info(&format!("Business totals for {}", summary.date));
    for line in table.render_lines() {
        output::info(&line);
    }
    output::info(&format!(
        "Gross sales {}, expenses {}, net {}",
        fmt_money(summary.gross_sales),
        fmt_money(summary.expenses.total),
        fmt_money(summary.net)
    ));
    Ok(())
}

fn cmd_expenses(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let date = match args.first().map(String::as_str) {
        None => Some(state.date),
        Some("all") => None,
        Some(raw) => Some(parse_cli_date(raw)?),
    };
    let (expenses, totals) = ExpenseService::list(&state.store, date)?;
    if expenses.is_empty() {
        output::info("No expenses found.");
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Date"),
            TableColumn::left("Name"),
            TableColumn::right("Amount"),
            TableColumn::left("Profit?"),
        ]);
        for expense in &expenses {
            table.add_row(vec![
                expense.date.to_string(),
                expense.name.clone(),
                fmt_money(expense.amount),
                if expense.is_profit { "yes" } else { "no" }.to_string(),
            ]);
        }
        for line in table.render_lines() {
            output::info(&line);
        }
    }
    output::info(&format!(
        "Expense totals: overall {}, profit-generating {}, overhead {}",
        fmt_money(totals.total),
        fmt_money(totals.profit_generating),
        fmt_money(totals.overhead)
    ));
    Ok(())
}

fn cmd_expense_add(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let usage = "expense-add <name> <amount> <yes|no> [date]";
    let name = arg(args, 0, usage)?;
    let amount = parse_amount(arg(args, 1, usage)?)?;
    let is_profit = match arg(args, 2, usage)? {
        "yes" | "y" | "1" => true,
        "no" | "n" | "0" => false,
        other => {
            return Err(ServiceError::Invalid(format!(
                "`{}` must be yes or no",
                other
            )))
        }
    };
    let date = match args.get(3) {
        Some(raw) => parse_cli_date(raw)?,
        None => state.date,
    };
    let expense = ExpenseService::add(&mut state.store, date, name, amount, is_profit)?;
    output::success(&format!("Recorded expense `{}`.", expense.name));
    Ok(())
}

fn cmd_loans(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let employee = arg(args, 0, "loans <employee>")?;
    let (loans, totals) = LoanService::overview(&state.store, employee)?;
    if loans.is_empty() {
        output::info(&format!("No loans for {}.", employee));
    } else {
        let mut table = Table::new(vec![
            TableColumn::right("#"),
            TableColumn::left("Date"),
            TableColumn::right("Amount"),
            TableColumn::right("Paid"),
            TableColumn::right("Remaining"),
        ]);
        for (idx, loan) in loans.iter().enumerate() {
            table.add_row(vec![
                (idx + 1).to_string(),
                loan.date.to_string(),
                fmt_money(loan.amount),
                fmt_money(loan.total_paid),
                fmt_money(loan.remaining()),
            ]);
        }
        for line in table.render_lines() {
            output::info(&line);
        }
    }
    output::info(&format!(
        "Loan totals: loaned {}, paid {}, remaining {}",
        fmt_money(totals.total_loaned),
        fmt_money(totals.total_paid),
        fmt_money(totals.total_remaining)
    ));
    Ok(())
}

fn cmd_loan_add(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let usage = "loan-add <employee> <amount>";
    let employee = arg(args, 0, usage)?;
    let amount = parse_amount(arg(args, 1, usage)?)?;
    let loan = LoanService::grant(&mut state.store, state.date, employee, amount)?;
    output::success(&format!(
        "Granted {} a loan of {}.",
        loan.employee,
        fmt_money(loan.amount)
    ));
    Ok(())
}

fn cmd_loan_pay(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    let usage = "loan-pay <employee> <row> <amount>";
    let employee = arg(args, 0, usage)?;
    let amount = parse_amount(arg(args, 2, usage)?)?;
    let (loans, _) = LoanService::overview(&state.store, employee)?;
    let id = resolve_row(&loans, arg(args, 1, usage)?)?;
    let updated = LoanService::record_payment(&mut state.store, employee, id, amount)?;
    output::success(&format!(
        "Payment recorded; {} remaining.",
        fmt_money(updated.remaining())
    ));
    Ok(())
}

fn cmd_policy(state: &mut ShellState, args: &[String]) -> ServiceResult<()> {
    match args.first().map(String::as_str) {
        None => {
            output::info(&format!("Oversell policy: {}", state.policy().label()));
        }
        Some("reject") => state.set_policy(OversellPolicy::Reject),
        Some("clamp") => state.set_policy(OversellPolicy::Clamp),
        Some("allow") => state.set_policy(OversellPolicy::AllowAndFlag),
        Some(other) => {
            return Err(ServiceError::Invalid(format!(
                "`{}` is not a policy (reject, clamp, allow)",
                other
            )))
        }
    }
    if !args.is_empty() {
        output::success(&format!("Oversell policy set to {}.", state.policy().label()));
    }
    Ok(())
}
