// Serialization round trips of ndview types live in tests/.
