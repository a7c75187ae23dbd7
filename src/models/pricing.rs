//! Desglose de precios
//!
//! Cálculo puro del precio de una reserva: tarifa por hora x duración,
//! más el recargo del 20% cuando un UtsavEvent solapa la ventana.
//! Todo en Decimal exacto; el redondeo a 2 decimales ocurre únicamente
//! en la frontera de presentación.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::event::UtsavEvent;
use super::time_range::TimeRange;

/// Recargo aplicado cuando la ventana solapa un evento activo
pub const EVENT_SURCHARGE_PERCENT: Decimal = dec!(20);

const EVENT_SURCHARGE_RATE: Decimal = dec!(0.20);

/// Desglose completo de precios de una reserva
#[derive(Debug, Clone, Serialize)]
pub struct PriceBreakdown {
    pub hourly_rate: Decimal,
    pub duration_hours: Decimal,
    pub base_price: Decimal,
    pub event_surcharge_percent: Decimal,
    pub event_surcharge_amount: Decimal,
    pub total_price: Decimal,
    pub overlapping_event: Option<UtsavEvent>,
}

impl PriceBreakdown {
    /// Calcular el desglose para una tarifa, ventana y evento solapado.
    ///
    /// El recargo depende solo del solapamiento temporal, no de qué tarifa
    /// se usó: una reserva a tarifa base que cae dentro de un evento paga
    /// igualmente el 20%.
    pub fn compute(
        hourly_rate: Decimal,
        window: &TimeRange,
        overlapping_event: Option<UtsavEvent>,
    ) -> Self {
        let duration_hours = window.duration_hours();
        let base_price = hourly_rate * duration_hours;

        let (percent, surcharge) = if overlapping_event.is_some() {
            (EVENT_SURCHARGE_PERCENT, base_price * EVENT_SURCHARGE_RATE)
        } else {
            (Decimal::ZERO, Decimal::ZERO)
        };

        Self {
            hourly_rate,
            duration_hours,
            base_price,
            event_surcharge_percent: percent,
            event_surcharge_amount: surcharge,
            total_price: base_price + surcharge,
            overlapping_event,
        }
    }
}
