use wfar_types::{Machine, MachineRule, MachineState, Symbol};

/// One line per state: its label, then one rule per symbol.
pub fn render_table(machine: &Machine) -> String {
    (0..machine.states)
        .map(|state| {
            let state = MachineState(state as u32);
            let rules = (0..machine.symbols)
                .map(|symbol| match machine.rule(state, Symbol(symbol as u32)) {
                    Some(MachineRule::Step {
                        write,
                        direction,
                        next,
                    }) if next.index() < machine.states => format!("{write}{direction}{next}"),
                    Some(MachineRule::Step { write, direction, .. }) => {
                        format!("{write}{direction}{}", wfar_types::HALT_LABEL)
                    }
                    Some(MachineRule::Halt) | None => "---".to_owned(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            format!("{state}: {rules}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
