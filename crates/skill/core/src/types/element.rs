//! Elements and elemental restrictions.

use bitflags::bitflags;

/// Element of a skill or of a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
#[strum(serialize_all = "snake_case")]
pub enum Element {
    Flame,
    Water,
    Wind,
    Light,
    Shadow,
    /// No element (e.g. some enemy parts).
    #[default]
    None,
    /// Raw code with no mapping.
    Unknown(u8),
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Flame,
        Element::Water,
        Element::Wind,
        Element::Light,
        Element::Shadow,
    ];

    pub const fn code(self) -> u8 {
        match self {
            Element::None => 0,
            Element::Flame => 1,
            Element::Water => 2,
            Element::Wind => 3,
            Element::Light => 4,
            Element::Shadow => 5,
            Element::Unknown(code) => code,
        }
    }

    /// Flag of this element inside an [`ElementFlags`] restriction.
    pub const fn flag(self) -> ElementFlags {
        match self {
            Element::Flame => ElementFlags::FLAME,
            Element::Water => ElementFlags::WATER,
            Element::Wind => ElementFlags::WIND,
            Element::Light => ElementFlags::LIGHT,
            Element::Shadow => ElementFlags::SHADOW,
            Element::None | Element::Unknown(_) => ElementFlags::empty(),
        }
    }

    /// Element this element deals 1.5x damage to.
    pub const fn effective_against(self) -> Option<Element> {
        match self {
            Element::Flame => Some(Element::Wind),
            Element::Wind => Some(Element::Water),
            Element::Water => Some(Element::Flame),
            Element::Light => Some(Element::Shadow),
            Element::Shadow => Some(Element::Light),
            Element::None | Element::Unknown(_) => None,
        }
    }

    /// Damage multiplier of an attack of element `self` against `target`.
    ///
    /// Same element and neutral pairs are 1.0, advantage 1.5, disadvantage 0.5.
    pub fn multiplier_against(self, target: Element) -> f64 {
        if self.effective_against() == Some(target) {
            1.5
        } else if target.effective_against() == Some(self) {
            0.5
        } else {
            1.0
        }
    }
}

impl From<u8> for Element {
    fn from(code: u8) -> Self {
        match code {
            0 => Element::None,
            1 => Element::Flame,
            2 => Element::Water,
            3 => Element::Wind,
            4 => Element::Light,
            5 => Element::Shadow,
            other => Element::Unknown(other),
        }
    }
}

impl From<Element> for u8 {
    fn from(element: Element) -> Self {
        element.code()
    }
}

bitflags! {
    /// Set of elements an action condition is restricted to.
    ///
    /// An empty set means the payload is not elementally restricted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ElementFlags: u8 {
        const FLAME = 1 << 0;
        const WATER = 1 << 1;
        const WIND = 1 << 2;
        const LIGHT = 1 << 3;
        const SHADOW = 1 << 4;
    }
}

impl ElementFlags {
    /// Elements of this set, in element declaration order.
    pub fn elements(self) -> impl Iterator<Item = Element> {
        Element::ALL
            .into_iter()
            .filter(move |element| self.contains(element.flag()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elemental_wheel() {
        assert_eq!(Element::Flame.multiplier_against(Element::Wind), 1.5);
        assert_eq!(Element::Flame.multiplier_against(Element::Water), 0.5);
        assert_eq!(Element::Flame.multiplier_against(Element::Flame), 1.0);
        assert_eq!(Element::Flame.multiplier_against(Element::Light), 1.0);
        assert_eq!(Element::Light.multiplier_against(Element::Shadow), 1.5);
        assert_eq!(Element::Shadow.multiplier_against(Element::Light), 1.5);
    }

    #[test]
    fn unknown_codes_are_kept() {
        assert_eq!(Element::from(9), Element::Unknown(9));
        assert_eq!(u8::from(Element::from(9)), 9);
    }

    #[test]
    fn flags_iterate_in_order() {
        let flags = ElementFlags::SHADOW | ElementFlags::FLAME;
        let elements: Vec<_> = flags.elements().collect();
        assert_eq!(elements, vec![Element::Flame, Element::Shadow]);
    }
}
