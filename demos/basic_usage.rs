// ============================================================================
// Basic Usage Example
// ============================================================================

use bignum_engine::prelude::*;
use std::sync::Arc;
use std::time::Duration;

fn print_report(report: &OperationReport) {
    println!("--- {} ---", report.operation);
    println!("{}", report.render());
    if let Some(check) = &report.check {
        println!(
            "Casting out nines: {} + {} -> {} ({})",
            check.root_a,
            check.root_b,
            check.root_sum,
            if check.consistent { "consistent" } else { "MISMATCH" }
        );
    }
    println!(
        "parse A: {}, parse B: {}, operation: {}, to decimal: {}\n",
        report.timings.parse_a,
        report.timings.parse_b,
        report.timings.operation,
        report.timings.to_decimal
    );
}

fn main() -> Result<(), CalculatorError> {
    #[cfg(feature = "logging")]
    bignum_engine::utils::init_tracing(tracing::Level::DEBUG);

    println!("=== BigNum Engine Example ===\n");

    let calculator = Arc::new(Calculator::new(
        CalculatorConfig::default(),
        Arc::new(LoggingEventHandler),
    )?);

    let a = "123456789012345678901234567890123456789";
    let b = "987654321987654321";

    for operation in [
        Operation::Add,
        Operation::Multiply,
        Operation::DivRem,
        Operation::Compare,
        Operation::Power {
            exponent: 3,
            target: OperandSlot::B,
        },
    ] {
        let report = calculator.execute(CalculationRequest::new(a, b, operation))?;
        print_report(&report);
    }

    // Errors come back as values
    match calculator.execute(CalculationRequest::new(a, "0", Operation::DivRem)) {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("Division by zero rejected: {}\n", err),
    }

    // Long-running work goes through the background executor
    println!("=== Background Primality Test ===");
    let executor = BackgroundExecutor::new(Arc::clone(&calculator));
    let handle = executor.submit(CalculationRequest::new(
        "1000000000039",
        "",
        Operation::PrimalityTest {
            target: OperandSlot::A,
        },
    ))?;
    println!("Submitted job {}", handle.id());

    if let Err(CalculatorError::Busy) =
        executor.submit(CalculationRequest::new("1", "1", Operation::Add))
    {
        println!("Second job rejected while the first is running");
    }

    let report = loop {
        match handle.wait_timeout(Duration::from_millis(100)) {
            Some(result) => break result?,
            None => println!("  still working..."),
        }
    };
    print_report(&report);

    Ok(())
}
